//! File discovery for playback logs
//!
//! Finds the log files in the input directory whose names end with the
//! configured suffix, in a stable order.

use crate::error::{Result, SplitError};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for playback logs
#[derive(Debug)]
pub struct FileDiscovery {
    input_dir: PathBuf,
    pattern: Pattern,
    recursive: bool,
}

impl FileDiscovery {
    /// Create a discovery over `input_dir` matching names ending in `suffix`
    pub fn new(input_dir: PathBuf, suffix: &str) -> Result<Self> {
        let pattern = Pattern::new(&format!("*{}", Pattern::escape(suffix))).map_err(|e| {
            SplitError::Configuration {
                message: format!("invalid file suffix '{}': {}", suffix, e),
            }
        })?;

        Ok(Self {
            input_dir,
            pattern,
            recursive: false,
        })
    }

    /// Also search sub-directories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Discover playback logs, sorted by path
    ///
    /// ```text
    /// logs/
    ///   run_0415.playback   <- picked up
    ///   run_0416.playback   <- picked up
    ///   notes.txt
    ///   archive/
    ///     run_0301.playback <- only with recursive discovery
    /// ```
    pub fn discover_playback_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(SplitError::InputDirectoryNotFound {
                path: self.input_dir.clone(),
            });
        }

        debug!(
            "Searching for '{}' files in: {}",
            self.pattern,
            self.input_dir.display()
        );

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.input_dir).min_depth(1).max_depth(max_depth) {
            let entry = entry?;
            if entry.file_type().is_file() && self.is_playback_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        debug!("Found {} playback files", files.len());

        Ok(files)
    }

    /// Check a path's file name against the suffix pattern
    fn is_playback_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.pattern.matches(name))
    }
}
