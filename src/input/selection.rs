//! File selection: turns a user-supplied path into the name the scorer sees

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A resume the user has picked. Only the name is ever handed to scoring;
/// the file's content is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub file_type: FileType,
}

impl SelectedFile {
    /// Validate `path` against `accepted_extensions` and capture its name.
    pub fn from_path(path: &Path, accepted_extensions: &[String]) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|_| {
            ResumeAnalyzerError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        if !metadata.is_file() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ResumeAnalyzerError::InvalidInput(format!("File has no usable name: {}", path.display()))
            })?
            .to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAnalyzerError::UnsupportedFormat(format!("File has no extension: {}", name))
            })?;

        if !accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
        {
            return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                ".{} (accepted: {})",
                extension,
                accepted_extensions.join(", ")
            )));
        }

        let file_type = FileType::from_extension(extension);
        debug!("Detected {:?} for {}", file_type, path.display());
        info!("Selected resume: {}", name);

        Ok(Self {
            name,
            path: path.to_path_buf(),
            file_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted() -> Vec<String> {
        vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()]
    }

    #[test]
    fn test_select_existing_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("React_Resume.PDF");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let selected = SelectedFile::from_path(&path, &accepted()).unwrap();
        assert_eq!(selected.name, "React_Resume.PDF");
        assert_eq!(selected.file_type, FileType::Pdf);
        assert_eq!(selected.path, path);
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = SelectedFile::from_path(&dir.path().join("nope.pdf"), &accepted());
        assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = SelectedFile::from_path(dir.path(), &accepted());
        assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
    }

    #[test]
    fn test_unaccepted_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "plain").unwrap();

        let result = SelectedFile::from_path(&path, &accepted());
        assert!(matches!(result, Err(ResumeAnalyzerError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_custom_extension_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "plain").unwrap();

        let selected = SelectedFile::from_path(&path, &["txt".to_string()]).unwrap();
        assert_eq!(selected.file_type, FileType::Unknown);
    }
}
