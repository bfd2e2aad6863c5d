//! Integration tests for the resume analyzer

use resume_analyzer::auth::Anonymous;
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::SelectedFile;
use resume_analyzer::interactive;
use resume_analyzer::output::formatter::ConsoleFormatter;
use resume_analyzer::output::{AnalysisReport, ReportGenerator};
use resume_analyzer::{AnalyzerEvent, ResumeAnalyzerError, Role, Session};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

fn resume_file(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"not actually read").unwrap();
    path
}

#[test]
fn test_select_and_analyze_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = resume_file(&dir, "React_Java_Project_Experience.pdf");
    let config = Config::default();

    let file = SelectedFile::from_path(&path, &config.input.accepted_extensions).unwrap();
    let mut session = Session::new();
    session.apply(AnalyzerEvent::FileChosen(file)).unwrap();
    let analysis = session.analyze().unwrap();

    assert_eq!(analysis.score, 75);
    assert_eq!(analysis.role, Role::FrontendDeveloper);
    assert_eq!(analysis.strength_titles(), vec!["Frontend Skills", "Programming"]);
    assert!(analysis.weaknesses.is_empty());
}

#[test]
fn test_file_content_does_not_matter() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("resume.docx");
    std::fs::write(&plain, "React Python projects and ten years of experience").unwrap();

    let file = SelectedFile::from_path(&plain, &Config::default().input.accepted_extensions).unwrap();
    let mut session = Session::new();
    session.select(file).unwrap();
    let analysis = session.analyze().unwrap();

    assert_eq!(analysis.score, 60);
    assert_eq!(analysis.strength_titles(), vec!["Resume Uploaded"]);
    assert_eq!(analysis.weakness_titles(), vec!["Projects", "Experience"]);
}

#[test]
fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = resume_file(&dir, "resume.xyz");

    let result = SelectedFile::from_path(&path, &Config::default().input.accepted_extensions);
    assert!(matches!(result, Err(ResumeAnalyzerError::UnsupportedFormat(_))));
}

#[test]
fn test_nonexistent_file() {
    let result = SelectedFile::from_path(
        std::path::Path::new("tests/fixtures/nonexistent.pdf"),
        &Config::default().input.accepted_extensions,
    );
    assert!(result.is_err());
}

#[test]
fn test_report_in_every_format() {
    let mut session = Session::new();
    let dir = tempfile::tempdir().unwrap();
    let path = resume_file(&dir, "frontend_resume.pdf");
    session.select(SelectedFile::from_path(&path, &Config::default().input.accepted_extensions).unwrap()).unwrap();
    let analysis = session.analyze().unwrap().clone();

    let report = AnalysisReport::new("frontend_resume.pdf", analysis);
    let generator = ReportGenerator::with_options(false, true, false, true, false);

    let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
    assert!(console.contains("Score: 70/100"));
    assert!(console.contains("React detected in resume name"));

    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["analysis"]["role"], "Frontend Developer");

    let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("**Suggested Role:** Frontend Developer"));

    let html = generator.generate_report(&report, &OutputFormat::Html).unwrap();
    assert!(html.contains("Suggested Role: Frontend Developer"));
}

#[test]
fn test_interactive_session_flow() {
    let dir = tempfile::tempdir().unwrap();
    let first = resume_file(&dir, "java_resume.pdf");
    let second = resume_file(&dir, "plain.doc");

    let script = format!(
        "analyze\nselect {}\nanalyze\nselect {}\nstatus\nquit\n",
        first.display(),
        second.display()
    );

    let mut session = Session::new();
    let formatter = ConsoleFormatter::new(false, false);
    let mut out = Vec::new();
    interactive::run(
        &mut session,
        &formatter,
        &Anonymous,
        &Config::default().input.accepted_extensions,
        Cursor::new(script),
        &mut out,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("No resume selected"));
    assert!(out.contains("Score: 65/100"));
    assert!(out.contains("State: file selected (plain.doc)"));
    // selecting a new file dropped the earlier result
    assert!(session.state().analysis().is_none());
}
