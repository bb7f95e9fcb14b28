//! Owned in-memory document tree.
//!
//! A pre-parsed exam report is stored as JSON: each element is
//! `{"tag": "...", "classes": [...], "children": [...]}` and each child is
//! either another element or a plain string for a text node.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::traits::DocumentNode;

/// A child of an element: nested element or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An element with its classes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

impl DocumentNode for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn element_children(&self) -> Vec<&Self> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            })
            .collect()
    }

    fn raw_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }
}

/// Load a document tree from a JSON file.
pub fn parse_document(path: &Path) -> Result<Element, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document_str(&content, path)
}

/// Parse a JSON string into a document tree (useful for testing).
pub fn parse_document_str(content: &str, source_path: &Path) -> Result<Element, DocumentError> {
    let root: Element = serde_json::from_str(content).map_err(|source| DocumentError::Parse {
        path: source_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "loaded document {} (root <{}>)",
        source_path.display(),
        root.tag
    );
    Ok(root)
}
