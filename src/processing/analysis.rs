//! Result types produced by resume scoring

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score every analysis starts from before any rule fires.
pub const BASELINE_SCORE: u32 = 60;

/// A single strength or weakness callout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub description: String,
}

impl Finding {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Role suggested for the candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Software Developer")]
    SoftwareDeveloper,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::SoftwareDeveloper => "Software Developer",
            Role::FrontendDeveloper => "Frontend Developer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one file name.
///
/// `score` is not clamped: rules only ever add to the baseline, so values
/// above 100 are possible once enough signals fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub score: u32,
    pub role: Role,
    pub strengths: Vec<Finding>,
    pub weaknesses: Vec<Finding>,
}

impl Analysis {
    pub fn strength_titles(&self) -> Vec<&str> {
        self.strengths.iter().map(|f| f.title.as_str()).collect()
    }

    pub fn weakness_titles(&self) -> Vec<&str> {
        self.weaknesses.iter().map(|f| f.title.as_str()).collect()
    }
}
