//! Analyzer session: what the user has selected and what was last analyzed

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::SelectedFile;
use crate::processing::{Analysis, ResumeScorer, Scorer};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalyzerState {
    #[default]
    Idle,
    FileSelected {
        file: SelectedFile,
    },
    Analyzed {
        file: SelectedFile,
        analysis: Analysis,
    },
}

impl AnalyzerState {
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            AnalyzerState::Idle => None,
            AnalyzerState::FileSelected { file } | AnalyzerState::Analyzed { file, .. } => Some(file),
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            AnalyzerState::Analyzed { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerState::Idle => "idle",
            AnalyzerState::FileSelected { .. } => "file selected",
            AnalyzerState::Analyzed { .. } => "analyzed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum AnalyzerEvent {
    /// A file was picked. Any earlier analysis is discarded.
    FileChosen(SelectedFile),
    /// Score the currently selected file.
    AnalyzeRequested,
}

pub struct Session<S: Scorer = ResumeScorer> {
    scorer: S,
    state: AnalyzerState,
}

impl Session<ResumeScorer> {
    pub fn new() -> Self {
        Self::with_scorer(ResumeScorer::new())
    }
}

impl Default for Session<ResumeScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> Session<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            state: AnalyzerState::Idle,
        }
    }

    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    /// Apply an event. On error the state is left untouched.
    pub fn apply(&mut self, event: AnalyzerEvent) -> Result<&AnalyzerState> {
        let previous = self.state.name();

        let next = match (std::mem::take(&mut self.state), event) {
            (_, AnalyzerEvent::FileChosen(file)) => AnalyzerState::FileSelected { file },
            (AnalyzerState::Idle, AnalyzerEvent::AnalyzeRequested) => {
                return Err(ResumeAnalyzerError::NoFileSelected);
            }
            (AnalyzerState::FileSelected { file }, AnalyzerEvent::AnalyzeRequested)
            | (AnalyzerState::Analyzed { file, .. }, AnalyzerEvent::AnalyzeRequested) => {
                let analysis = self.scorer.score(&file.name);
                info!(
                    "Analyzed {}: score {}, role {}",
                    file.name, analysis.score, analysis.role
                );
                AnalyzerState::Analyzed { file, analysis }
            }
        };

        debug!("Session transition: {} -> {}", previous, next.name());
        self.state = next;
        Ok(&self.state)
    }

    pub fn select(&mut self, file: SelectedFile) -> Result<&AnalyzerState> {
        self.apply(AnalyzerEvent::FileChosen(file))
    }

    pub fn analyze(&mut self) -> Result<&Analysis> {
        self.apply(AnalyzerEvent::AnalyzeRequested)?;
        self.state
            .analysis()
            .ok_or(ResumeAnalyzerError::NoFileSelected)
    }

    pub fn reset(&mut self) {
        debug!("Session reset from {}", self.state.name());
        self.state = AnalyzerState::Idle;
    }
}
