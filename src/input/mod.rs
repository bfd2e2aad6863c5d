//! Input module
//! Handles resume file selection and type detection

pub mod file_detector;
pub mod selection;

pub use selection::SelectedFile;
