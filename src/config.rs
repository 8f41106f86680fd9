//! Runtime configuration for a splitting run.
//!
//! Holds the input and output locations and the driver switches the CLI
//! maps its flags onto. There is no configuration file; defaults come from
//! [`crate::constants`].

use crate::constants::{DEFAULT_FILE_SUFFIX, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the splitter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Directory scanned for playback logs
    pub input_dir: PathBuf,

    /// Root under which `ato_*` category directories are created
    pub output_dir: PathBuf,

    /// File name suffix selecting playback logs; stripped to build output names
    pub file_suffix: String,

    /// Descend into sub-directories of the input directory
    pub recursive: bool,

    /// Only report which categories each log would produce
    pub scan_only: bool,

    /// Draw a progress bar while processing
    pub show_progress: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            recursive: false,
            scan_only: false,
            show_progress: true,
        }
    }
}

impl SplitterConfig {
    /// Set the input directory
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Set the output root
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the playback file suffix
    pub fn with_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    /// Enable recursive discovery
    pub fn with_recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Enable scan-only mode
    pub fn with_scan_only(mut self) -> Self {
        self.scan_only = true;
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Reject settings that would make discovery or naming meaningless
    pub fn validate(&self) -> Result<()> {
        if self.file_suffix.is_empty() {
            return Err(SplitError::Configuration {
                message: "file suffix must not be empty".to_string(),
            });
        }
        if self.file_suffix.contains(['/', '\\']) {
            return Err(SplitError::Configuration {
                message: format!(
                    "file suffix '{}' must not contain path separators",
                    self.file_suffix
                ),
            });
        }
        Ok(())
    }
}
