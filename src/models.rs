//! Core data structures and types for playback log splitting.
//!
//! Defines the fixed category table, parsed rows, and the statistics
//! reported per input file and per run.

use crate::constants::{OUTPUT_EXTENSION, SYSTEM_KEYWORD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Log line categories recognised by the splitter
///
/// Declaration order is the order categories are tested and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Train,
    TempZone,
    Gate,
    Ocs,
    TrackCircuit,
    Matrix,
    Panel,
    Rato,
    Ratp,
    Station,
    Ccu,
    Switch,
}

impl Category {
    /// Every category, in routing order
    pub const ALL: [Category; 12] = [
        Category::Train,
        Category::TempZone,
        Category::Gate,
        Category::Ocs,
        Category::TrackCircuit,
        Category::Matrix,
        Category::Panel,
        Category::Rato,
        Category::Ratp,
        Category::Station,
        Category::Ccu,
        Category::Switch,
    ];

    /// Tag that must appear in a line, alongside `ATO`, for it to belong here
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Train => "Train",
            Category::TempZone => "TempZone",
            Category::Gate => "Gate",
            Category::Ocs => "OCS",
            Category::TrackCircuit => "TrackCircuit",
            Category::Matrix => "Matrix",
            Category::Panel => "Panel",
            Category::Rato => "RATO",
            Category::Ratp => "RATP",
            Category::Station => "Station",
            Category::Ccu => "CCU",
            Category::Switch => "Switch",
        }
    }

    /// Keyword pair tested against file content and individual lines
    pub fn keywords(&self) -> [&'static str; 2] {
        [SYSTEM_KEYWORD, self.tag()]
    }

    /// Directory (and file name suffix) for this category, e.g. `ato_trackcircuit`
    pub fn dir_name(&self) -> String {
        format!(
            "{}_{}",
            SYSTEM_KEYWORD.to_lowercase(),
            self.tag().to_lowercase()
        )
    }

    /// Whether the category file starts with the column header line
    pub fn has_header(&self) -> bool {
        matches!(self, Category::Train | Category::Switch)
    }

    /// Output path for a log whose name without suffix is `stem`
    ///
    /// ```text
    /// {output_root}/ato_gate/{stem}_ato_gate.csv
    /// ```
    pub fn output_path(&self, output_root: &Path, stem: &str) -> PathBuf {
        let dir_name = self.dir_name();
        output_root
            .join(&dir_name)
            .join(format!("{}_{}.{}", stem, dir_name, OUTPUT_EXTENSION))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One CSV row built from a retained log line
///
/// `None` marks a sentinel value and is written as an empty field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub fields: Vec<Option<String>>,
}

impl LogRow {
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self { fields }
    }

    /// Fields as written to CSV, sentinels rendered empty
    pub fn record(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.as_deref().unwrap_or(""))
    }
}

/// Per-category output produced for one input log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutput {
    pub path: PathBuf,
    pub rows_written: usize,
}

/// Statistics for splitting a single input log
#[derive(Debug, Default, Clone)]
pub struct SplitStats {
    pub input_path: PathBuf,
    pub lines_read: usize,
    pub lines_discarded: usize,
    pub lines_malformed: usize,
    pub lines_routed: usize,
    pub outputs: BTreeMap<Category, CategoryOutput>,
}

impl SplitStats {
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            ..Default::default()
        }
    }

    /// Rows written across all category files
    pub fn total_rows(&self) -> usize {
        self.outputs.values().map(|o| o.rows_written).sum()
    }

    /// Categories whose files were created, in routing order
    pub fn active_categories(&self) -> Vec<Category> {
        self.outputs.keys().copied().collect()
    }
}

/// Pre-scan result for a log inspected without writing output
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub input_path: PathBuf,
    pub categories: Vec<Category>,
}

/// Processing statistics for a whole run
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    /// Logs split successfully, in processing order
    pub completed_files: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}
