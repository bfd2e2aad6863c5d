//! Heuristic resume scoring based on the selected file's name

use crate::processing::analysis::{Analysis, Finding, Role, BASELINE_SCORE};

/// Anything that can turn a resume file name into an [`Analysis`].
///
/// Implementations must be total: every string, including the empty one,
/// yields an analysis.
pub trait Scorer {
    fn score(&self, file_name: &str) -> Analysis;
}

/// A keyword signal that, when present, adds a strength.
struct SignalRule {
    keywords: &'static [&'static str],
    title: &'static str,
    description: &'static str,
    role: Option<Role>,
    bonus: u32,
}

/// A keyword whose absence is reported as a weakness.
struct GapRule {
    keyword: &'static str,
    title: &'static str,
    description: &'static str,
}

// Evaluation order drives the order of findings in the output.
const SIGNAL_RULES: &[SignalRule] = &[
    SignalRule {
        keywords: &["react", "frontend"],
        title: "Frontend Skills",
        description: "React detected in resume name",
        role: Some(Role::FrontendDeveloper),
        bonus: 10,
    },
    SignalRule {
        keywords: &["java", "python"],
        title: "Programming",
        description: "Programming language detected",
        role: None,
        bonus: 5,
    },
];

const GAP_RULES: &[GapRule] = &[
    GapRule {
        keyword: "project",
        title: "Projects",
        description: "Add projects section",
    },
    GapRule {
        keyword: "experience",
        title: "Experience",
        description: "Add experience section",
    },
];

const FALLBACK_TITLE: &str = "Resume Uploaded";
const FALLBACK_DESCRIPTION: &str = "File recognized successfully";

/// Name-based scorer. Stateless, so a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeScorer;

impl ResumeScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for ResumeScorer {
    fn score(&self, file_name: &str) -> Analysis {
        let normalized = file_name.to_lowercase();

        let mut score = BASELINE_SCORE;
        let mut role = Role::SoftwareDeveloper;
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for rule in SIGNAL_RULES {
            if rule.keywords.iter().any(|k| normalized.contains(k)) {
                strengths.push(Finding::new(rule.title, rule.description));
                if let Some(r) = rule.role {
                    role = r;
                }
                score += rule.bonus;
            }
        }

        for rule in GAP_RULES {
            if !normalized.contains(rule.keyword) {
                weaknesses.push(Finding::new(rule.title, rule.description));
            }
        }

        if strengths.is_empty() {
            strengths.push(Finding::new(FALLBACK_TITLE, FALLBACK_DESCRIPTION));
        }

        Analysis {
            score,
            role,
            strengths,
            weaknesses,
        }
    }
}

/// Convenience wrapper around [`ResumeScorer`].
pub fn score(file_name: &str) -> Analysis {
    ResumeScorer.score(file_name)
}
