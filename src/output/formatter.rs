//! Output formatters for analysis reports and session screens

use crate::auth::UserProvider;
use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::AnalysisReport;
use crate::processing::Finding;
use crate::session::AnalyzerState;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const PROGRESS_CELLS: usize = 20;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with a self-contained page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: linear-gradient(135deg, #eff6ff, #ffffff, #faf5ff);
        }
        .card {
            background: white;
            padding: 24px;
            border-radius: 12px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            margin-bottom: 24px;
        }
        .header { text-align: center; margin-bottom: 30px; }
        .score { display: flex; justify-content: space-between; color: #9333ea; }
        .progress { background: #e9ecef; border-radius: 6px; height: 10px; }
        .progress-fill { background: #9333ea; border-radius: 6px; height: 10px; }
        .role { color: #9333ea; font-size: 0.9em; }
        .badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 12px;
            font-weight: bold;
            color: white;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .findings { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
        .strengths h2 { color: #16a34a; }
        .improve h2 { color: #ea580c; }
        .description { color: #6c757d; font-size: 0.9em; }
        .metadata { font-size: 0.8em; color: #6c757d; text-align: center; }
    </style>
    {% endif %}
</head>
<body>
    <div class="header">
        <h1>Resume Analyzer</h1>
        <p>{{ file_name }}</p>
    </div>

    <div class="card">
        <h2 class="score"><span>Score</span><span>{{ score }}/100</span></h2>
        <div class="progress"><div class="progress-fill" style="width: {{ progress }}%"></div></div>
        <p><span class="badge {{ score_class }}">{{ score_label }}</span></p>
        <p class="role">Suggested Role: {{ role }}</p>
    </div>

    <div class="findings">
        <div class="card strengths">
            <h2>✔ Strengths</h2>
            {% for finding in strengths %}
            <p><strong>{{ finding.title }}</strong><br><span class="description">{{ finding.description }}</span></p>
            {% endfor %}
        </div>
        <div class="card improve">
            <h2>⚠ Improve</h2>
            {% for finding in weaknesses %}
            <p><strong>{{ finding.title }}</strong><br><span class="description">{{ finding.description }}</span></p>
            {% endfor %}
        </div>
    </div>

    <div class="metadata">
        <p>Generated {{ generated_at }} by Resume Analyzer v{{ version }}</p>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    file_name: &'a str,
    score: u32,
    progress: u8,
    score_class: &'static str,
    score_label: &'static str,
    role: &'static str,
    strengths: &'a [Finding],
    weaknesses: &'a [Finding],
    generated_at: String,
    version: &'a str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Magenta,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let (badge, color) = match score {
            90.. => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_progress_bar(&self, percent: u8) -> String {
        let filled = (percent as usize * PROGRESS_CELLS) / 100;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(PROGRESS_CELLS - filled)
        );
        format!("[{}] {}%", self.colorize(&bar, Color::Magenta), percent)
    }

    fn format_findings(&self, findings: &[Finding], marker: &str, color: Color) -> String {
        if findings.is_empty() {
            return "  (none)\n".to_string();
        }

        let mut output = String::new();
        for finding in findings {
            output.push_str(&format!("  {} {}\n", marker, self.colorize(&finding.title, color)));
            if self.detailed {
                output.push_str(&format!("      {}\n", finding.description));
            }
        }
        output
    }

    /// Render the whole screen for a session state: the upload panel,
    /// then either the report or the empty-state card.
    pub fn format_state(&self, state: &AnalyzerState, users: &dyn UserProvider) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("Resume Analyzer", 1));
        output.push_str("Upload your resume and get feedback\n");

        output.push_str(&self.format_header("Upload Resume", 2));
        let selected = state
            .selected_file()
            .map(|f| f.name.as_str())
            .unwrap_or("Click to upload resume");
        output.push_str(&format!("  📄 {}\n", selected));
        if users.current_user().is_none() {
            output.push_str(&format!("  {}\n", self.colorize("(Login optional for now)", Color::BrightBlack)));
        }

        match state {
            AnalyzerState::Analyzed { file, analysis } => {
                let report = AnalysisReport::new(file.name.clone(), analysis.clone());
                output.push_str(&self.format_report(&report)?);
            }
            _ => output.push_str(&self.format_empty_state()),
        }

        Ok(output)
    }

    pub fn format_empty_state(&self) -> String {
        let mut output = self.format_header("Results", 2);
        output.push_str(&format!("  {}\n", self.colorize("Upload and analyze your resume", Color::BrightBlack)));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME ANALYSIS", 1));
        output.push_str(&format!("Resume: {} | Generated: {}\n", report.file_name, report.generated_at_utc()));

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "Score: {}/100 {}\n",
            analysis.score,
            self.format_score_badge(analysis.score)
        ));
        output.push_str(&format!("{}\n", self.format_progress_bar(report.progress_percent())));
        output.push_str(&format!(
            "Suggested Role: {}\n",
            self.colorize(analysis.role.label(), Color::Cyan)
        ));

        output.push_str(&self.format_header("✅ Strengths", 3));
        output.push_str(&self.format_findings(&analysis.strengths, "✔", Color::Green));

        output.push_str(&self.format_header("⚠️  Improve", 3));
        output.push_str(&self.format_findings(&analysis.weaknesses, "⚠", Color::Yellow));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u32) -> &'static str {
        match score {
            90.. => "🟢 Excellent",
            70..=89 => "🔵 Good",
            60..=69 => "🟡 Fair",
            _ => "🔴 Poor",
        }
    }

    fn push_findings(output: &mut String, findings: &[Finding]) {
        if findings.is_empty() {
            output.push_str("_None_\n");
        }
        for finding in findings {
            output.push_str(&format!("- **{}**: {}\n", finding.title, finding.description));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# 📄 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}`\n\n",
                report.generated_at_utc(),
                report.file_name
            ));
        }

        output.push_str("## Score\n\n");
        output.push_str(&format!(
            "**Score:** {}/100 {}\n\n",
            analysis.score,
            Self::markdown_score_badge(analysis.score)
        ));
        output.push_str(&format!("**Suggested Role:** {}\n\n", analysis.role));

        output.push_str("## ✅ Strengths\n\n");
        Self::push_findings(&mut output, &analysis.strengths);

        output.push_str("## ⚠️ Improve\n\n");
        Self::push_findings(&mut output, &analysis.weaknesses);

        if self.include_metadata {
            output.push_str(&format!("---\n*Generated by Resume Analyzer v{}*\n", report.metadata.tool_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data<'a>(&self, report: &'a AnalysisReport, generated_at: String) -> HtmlTemplate<'a> {
        let (score_class, score_label) = match report.analysis.score {
            90.. => ("score-excellent", "Excellent"),
            80..=89 => ("score-good", "Very Good"),
            70..=79 => ("score-good", "Good"),
            60..=69 => ("score-fair", "Fair"),
            _ => ("score-poor", "Poor"),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            file_name: &report.file_name,
            score: report.analysis.score,
            progress: report.progress_percent(),
            score_class,
            score_label,
            role: report.analysis.role.label(),
            strengths: &report.analysis.strengths,
            weaknesses: &report.analysis.weaknesses,
            generated_at,
            version: &report.metadata.tool_version,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template_data = self.create_template_data(report, report.generated_at_utc());
        template_data
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_analysis{}.html", base_name, timestamp_suffix),
    }
}
