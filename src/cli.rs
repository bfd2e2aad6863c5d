//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Score a resume file and get role and improvement suggestions")]
#[command(long_about = "Pick a resume file (PDF, DOC, DOCX) and receive a quality score, a suggested role, and lists of strengths and weaknesses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume file
    Analyze {
        /// Path to resume file (PDF, DOC, DOCX)
        file: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Include finding descriptions
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Select and analyze files interactively
    Interactive,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "output.format")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "resume-analyzer",
            "-v",
            "analyze",
            "react_resume.pdf",
            "--output",
            "json",
            "--no-color",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { file, output, detailed, save, no_color } => {
                assert_eq!(file, PathBuf::from("react_resume.pdf"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(!detailed);
                assert!(save.is_none());
                assert!(no_color);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_config_set_arguments() {
        let cli = Cli::try_parse_from(["resume-analyzer", "config", "set", "output.detailed", "true"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config { action: Some(ConfigAction::Set { ref key, ref value }) }
                if key == "output.detailed" && value == "true"
        ));
    }
}
