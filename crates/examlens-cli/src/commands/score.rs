//! The `examlens score` command.

use anyhow::Result;

use examlens_core::scoring::{
    combined_module_score, score_breakdown, sectional_score_breakdown, ScoreOutcome,
};

pub fn execute(
    correct: i32,
    total: f64,
    subject: &str,
    subject2: &str,
    full_test: bool,
    sectional: bool,
    combined: bool,
) -> Result<()> {
    anyhow::ensure!(
        total.is_finite() && total >= 0.0,
        "total must be a non-negative number"
    );

    if combined {
        let score = combined_module_score(correct, total, subject, subject2);
        println!("Combined module score: {score}");
        return Ok(());
    }

    let b = if sectional {
        sectional_score_breakdown(correct, total, subject, subject2)
    } else {
        score_breakdown(correct, total, subject, subject2, full_test)
    };
    println!("Subject:   {}", b.subject);
    println!("Table:     {:?}", b.table);
    if b.effective_correct != b.raw_correct {
        println!(
            "Correct:   {} (prorated to {})",
            b.raw_correct, b.effective_correct
        );
    } else {
        println!("Correct:   {}", b.raw_correct);
    }
    match b.outcome {
        ScoreOutcome::NothingToScore => println!("Band:      none (nothing to score)"),
        ScoreOutcome::Banded { bounds } => {
            println!("Band:      {}-{}", bounds.lower, bounds.upper)
        }
        ScoreOutcome::OutOfDomain => println!("Band:      none (count outside table)"),
    }
    println!("Scaled score: {}", b.scaled_score);

    Ok(())
}
