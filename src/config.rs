//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub account: AccountConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub accepted_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                accepted_extensions: vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()],
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
            account: AccountConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults there if it does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            info!("No configuration at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Set a single value addressed as `section.key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeAnalyzerError::InvalidInput)?;
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_bool(key, value)?,
            "input.accepted_extensions" => {
                let extensions: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if extensions.is_empty() {
                    return Err(ResumeAnalyzerError::InvalidInput(
                        "input.accepted_extensions needs at least one extension".to_string(),
                    ));
                }
                self.input.accepted_extensions = extensions;
            }
            "account.user" => {
                let trimmed = value.trim();
                self.account.user = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            _ => {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    let parsed = value
        .trim()
        .parse::<bool>()
        .with_context(|| format!("{} expects true or false, got '{}'", key, value))?;
    Ok(parsed)
}
