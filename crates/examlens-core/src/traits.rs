//! Core trait definitions for the parsed-document seam.
//!
//! The extractor never parses markup itself. It walks any tree that
//! implements [`DocumentNode`]; [`crate::document::Element`] is the owned
//! implementation shipped with this crate.

/// A node in an already-parsed exam-report document.
///
/// Implementations must return children in document order, since the
/// extractor output is order-sensitive.
pub trait DocumentNode {
    /// Element tag name, lowercase (e.g. "tr").
    fn tag(&self) -> &str;

    /// Whether the element carries `class` in its class list.
    fn has_class(&self, class: &str) -> bool;

    /// Element children in document order. Text nodes are skipped.
    fn element_children(&self) -> Vec<&Self>;

    /// Concatenated text of all descendant text nodes, without trimming.
    fn raw_text(&self) -> String;

    /// Visible text with surrounding whitespace trimmed.
    fn text(&self) -> String {
        self.raw_text().trim().to_string()
    }
}
