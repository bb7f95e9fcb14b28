//! examlens-core: exam report extraction, answer evaluation, and scoring.
//!
//! This crate defines the data model, the document seam, the section
//! extractor, and the band-table scoring engine that the rest of examlens
//! builds on.

pub mod bands;
pub mod config;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod model;
pub mod query;
pub mod report;
pub mod scoring;
pub mod statistics;
pub mod traits;
