//! Scoring module
//! Turns a resume file name into an analysis

pub mod analysis;
pub mod scorer;

pub use analysis::{Analysis, Finding, Role};
pub use scorer::{ResumeScorer, Scorer};
