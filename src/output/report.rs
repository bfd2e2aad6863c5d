//! Report structures handed to the formatters

use crate::processing::Analysis;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// An analysis together with what is needed to present it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Name of the analyzed file as the user selected it
    pub file_name: String,

    /// The scorer's result, untouched
    pub analysis: Analysis,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub tool_version: String,
}

impl AnalysisReport {
    pub fn new(file_name: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            file_name: file_name.into(),
            analysis,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Score clamped to 0..=100 for progress bars. The score itself may
    /// exceed 100 and is shown as-is elsewhere.
    pub fn progress_percent(&self) -> u8 {
        self.analysis.score.min(100) as u8
    }

    pub fn generated_at_utc(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from(self.metadata.generated_at)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{Role, ResumeScorer, Scorer};

    #[test]
    fn test_report_wraps_analysis() {
        let analysis = ResumeScorer.score("react_resume.pdf");
        let report = AnalysisReport::new("react_resume.pdf", analysis.clone());

        assert_eq!(report.analysis, analysis);
        assert_eq!(report.progress_percent(), 70);
        assert!(report.generated_at_utc().ends_with("UTC"));
    }

    #[test]
    fn test_progress_clamps_but_score_does_not() {
        let analysis = Analysis {
            score: 130,
            role: Role::SoftwareDeveloper,
            strengths: vec![],
            weaknesses: vec![],
        };
        let report = AnalysisReport::new("x.pdf", analysis);

        assert_eq!(report.progress_percent(), 100);
        assert_eq!(report.analysis.score, 130);
    }
}
