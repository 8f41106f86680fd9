//! Error handling for playback log splitting.
//!
//! Distinguishes failures reading an input log, which only affect that
//! file, from failures creating or writing category outputs, which abort
//! the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Input log not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input log {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write category file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Input directory not found: {path}")]
    InputDirectoryNotFound { path: PathBuf },

    #[error("Directory traversal error: {source}")]
    DirectoryTraversal {
        #[from]
        source: walkdir::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SplitError {
    /// True when the failure is local to one input file and the batch can move on
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SplitError::InputNotFound { .. } | SplitError::InputUnreadable { .. }
        )
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::output_write(path, csv::Error::from(source))
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
