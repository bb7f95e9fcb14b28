//! examlens-report: self-contained HTML rendering of exam analyses.

pub mod html;
