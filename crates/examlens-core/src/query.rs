//! Structural queries over a [`DocumentNode`] tree.
//!
//! A query is a chain of [`Step`]s joined by the descendant combinator:
//! each step matches among the descendants of the previous step's matches.
//! Results are deduplicated and always come back in document order.

use std::collections::HashSet;

use crate::traits::DocumentNode;

/// One compound selector: every set predicate must hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step<'a> {
    tag: Option<&'a str>,
    class: Option<&'a str>,
    nth_child: Option<usize>,
    contains: Option<&'a str>,
}

impl<'a> Step<'a> {
    /// Match elements by tag name (ASCII case-insensitive).
    pub fn tag(tag: &'a str) -> Self {
        Self {
            tag: Some(tag),
            ..Default::default()
        }
    }

    /// Match elements carrying a class.
    pub fn class(class: &'a str) -> Self {
        Self {
            class: Some(class),
            ..Default::default()
        }
    }

    /// Require the element to be the `n`th (1-based) element child of its parent.
    pub fn nth_child(mut self, n: usize) -> Self {
        self.nth_child = Some(n);
        self
    }

    /// Require the element's text to contain `text`.
    pub fn containing(mut self, text: &'a str) -> Self {
        self.contains = Some(text);
        self
    }

    fn matches<N: DocumentNode>(&self, node: &N, position: usize) -> bool {
        if let Some(tag) = self.tag {
            if !node.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(class) = self.class {
            if !node.has_class(class) {
                return false;
            }
        }
        if let Some(n) = self.nth_child {
            if position != n {
                return false;
            }
        }
        if let Some(text) = self.contains {
            if !node.raw_text().contains(text) {
                return false;
            }
        }
        true
    }
}

/// Find all elements below `root` matching the step chain, in document order.
///
/// `root` itself is never a match.
pub fn select<'n, N: DocumentNode>(root: &'n N, steps: &[Step<'_>]) -> Vec<&'n N> {
    let mut current = vec![root];

    for step in steps {
        let mut next: Vec<&'n N> = Vec::new();
        if let [context] = current.as_slice() {
            collect_descendants(*context, step, &mut next);
        } else {
            // A context nested inside an earlier one yields repeats.
            let mut seen: HashSet<*const N> = HashSet::new();
            for context in &current {
                let mut found = Vec::new();
                collect_descendants(*context, step, &mut found);
                next.extend(found.into_iter().filter(|node| seen.insert(*node as *const N)));
            }
        }
        if next.is_empty() {
            return next;
        }
        current = next;
    }

    current
}

/// Trimmed, concatenated text of every match; empty when nothing matches.
pub fn select_text<N: DocumentNode>(root: &N, steps: &[Step<'_>]) -> String {
    let raw: String = select(root, steps)
        .into_iter()
        .map(|n| n.raw_text())
        .collect();
    raw.trim().to_string()
}

fn collect_descendants<'n, N: DocumentNode>(node: &'n N, step: &Step<'_>, out: &mut Vec<&'n N>) {
    for (i, child) in node.element_children().into_iter().enumerate() {
        if step.matches(child, i + 1) {
            out.push(child);
        }
        collect_descendants(child, step, out);
    }
}
