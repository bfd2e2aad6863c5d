//! Resume analyzer: score a resume file and suggest improvements

use clap::Parser;
use log::{error, info};
use resume_analyzer::auth::ConfiguredUser;
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::error::{Result, ResumeAnalyzerError};
use resume_analyzer::input::SelectedFile;
use resume_analyzer::interactive;
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename, ConsoleFormatter, ReportGenerator};
use resume_analyzer::output::AnalysisReport;
use resume_analyzer::session::Session;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Load configuration
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            output,
            detailed,
            save,
            no_color,
        } => {
            let format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };
            analyze(&file, format, detailed || config.output.detailed, no_color, save, &config)?;
        }

        Commands::Interactive => {
            info!("Starting interactive session");
            let mut session = Session::new();
            let formatter = ConsoleFormatter::new(config.output.color_output, config.output.detailed);
            let users = ConfiguredUser::from_config(&config);
            let stdin = std::io::stdin();
            interactive::run(
                &mut session,
                &formatter,
                &users,
                &config.input.accepted_extensions,
                stdin.lock(),
                std::io::stdout(),
            )?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Accepted Extensions: {}", config.input.accepted_extensions.join(", "));
                println!("Output Format: {:?}", config.output.format);
                println!("Detailed: {}", config.output.detailed);
                println!("Color Output: {}", config.output.color_output);
                println!("Pretty JSON: {}", config.output.pretty_json);
                println!("User: {}", config.account.user.as_deref().unwrap_or("(not signed in)"));
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn analyze(
    path: &Path,
    format: resume_analyzer::config::OutputFormat,
    detailed: bool,
    no_color: bool,
    save: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let file = SelectedFile::from_path(path, &config.input.accepted_extensions)?;

    let mut session = Session::new();
    session.select(file.clone())?;
    let analysis = session.analyze()?.clone();

    let report = AnalysisReport::new(file.name, analysis);
    let generator = ReportGenerator::with_options(
        config.output.color_output && !no_color && save.is_none(),
        detailed,
        config.output.pretty_json,
        true,
        true,
    );
    let rendered = generator.generate_report(&report, &format)?;

    match save {
        Some(target) => {
            let target = if target.is_dir() {
                target.join(suggest_filename(&format, &report.file_name, true))
            } else {
                target
            };
            save_report_to_file(&rendered, &target)?;
            println!("💾 Report saved to {}", target.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
