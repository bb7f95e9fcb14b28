use criterion::{black_box, criterion_group, criterion_main, Criterion};

use examlens_core::document::Element;
use examlens_core::extractor::extract_exam;
use examlens_core::statistics::compute_exam_statistics;

const STATUSES: [&str; 4] = [
    "Answered",
    "Not Answered",
    "Marked For Review",
    "Not Attempted and Marked For Review",
];

fn row(label: &str, value: &str) -> Element {
    Element::new("tr").children([
        Element::new("td").text(label),
        Element::new("td").text(value),
    ])
}

fn question(id: usize) -> Element {
    let status = STATUSES[id % STATUSES.len()];
    let chosen = if id % 3 == 0 { "2" } else { "1" };
    Element::new("div")
        .class("question-pnl")
        .child(
            Element::new("table").class("menu-tbl").child(Element::new("tbody").children([
                row("Question ID :", &id.to_string()),
                row("Status :", status),
                row("Chosen Option :", chosen),
            ])),
        )
        .child(Element::new("td").class("rightAns").text("1. Option text"))
}

fn make_document(sections: usize, per_section: usize) -> Element {
    Element::new("html").children((0..sections).map(|s| {
        Element::new("div")
            .class("section-cntnr")
            .child(
                Element::new("div")
                    .class("section-lbl")
                    .child(Element::new("span").class("bold").text(format!("Section {s}"))),
            )
            .children((0..per_section).map(|q| question(s * per_section + q)))
    }))
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    let small = make_document(2, 22);
    group.bench_function("2x22", |b| b.iter(|| extract_exam(black_box(&small))));

    let full = make_document(4, 27);
    group.bench_function("4x27", |b| b.iter(|| extract_exam(black_box(&full))));

    group.bench_function("4x27_with_statistics", |b| {
        b.iter(|| compute_exam_statistics(&extract_exam(black_box(&full)), true))
    });

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
