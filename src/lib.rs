//! Resume analyzer library

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod output;
pub mod processing;
pub mod session;

pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
pub use processing::{Analysis, Finding, ResumeScorer, Role, Scorer};
pub use session::{AnalyzerEvent, AnalyzerState, Session};
