//! Single-log split routine
//!
//! Phase 1 reads the whole log and picks the active categories; phase 2
//! walks the cached lines, builds rows and routes each one to every
//! active category whose keyword pair appears in that line.

use super::classifier::{active_categories, line_categories};
use super::writer::CategoryWriters;

use crate::error::{Result, SplitError};
use crate::models::{ScanReport, SplitStats};
use crate::parser::{LineOutcome, classify_line, log_lines};

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Split one playback log into category CSV files under `output_root`
///
/// `suffix` is stripped from the log's file name to build output names:
/// `logs/run_0415.playback` becomes `ato_gate/run_0415_ato_gate.csv`.
pub fn split_log_file(input_path: &Path, output_root: &Path, suffix: &str) -> Result<SplitStats> {
    let content = read_log(input_path)?;
    let stem = output_stem(input_path, suffix);

    let active = active_categories(&content);
    if active.is_empty() {
        warn!(
            "No ATO categories found in {}, nothing written",
            input_path.display()
        );
    } else {
        debug!(
            "Active categories for {}: {:?}",
            input_path.display(),
            active
        );
    }

    let mut writers = CategoryWriters::open(&active, output_root, &stem)?;
    let mut stats = SplitStats::new(input_path.to_path_buf());

    for (line_num, line) in log_lines(&content).enumerate() {
        stats.lines_read += 1;

        let row = match classify_line(line) {
            LineOutcome::Row(row) => row,
            LineOutcome::Discarded => {
                trace!("Discarded line {}", line_num + 1);
                stats.lines_discarded += 1;
                continue;
            }
            LineOutcome::Malformed => {
                trace!("Skipped malformed line {}", line_num + 1);
                stats.lines_malformed += 1;
                continue;
            }
        };

        trace!("Line {} -> {} fields", line_num + 1, row.fields.len());

        let mut routed = false;
        for category in line_categories(line, &active) {
            routed |= writers.write_row(category, &row)?;
        }
        if routed {
            stats.lines_routed += 1;
        }
    }

    stats.outputs = writers.finish()?;

    debug!(
        "Split {}: {} lines, {} discarded, {} malformed, {} rows written",
        input_path.display(),
        stats.lines_read,
        stats.lines_discarded,
        stats.lines_malformed,
        stats.total_rows()
    );

    Ok(stats)
}

/// Run only the pre-scan for a log, creating nothing
pub fn scan_log_file(input_path: &Path) -> Result<ScanReport> {
    let content = read_log(input_path)?;

    Ok(ScanReport {
        input_path: input_path.to_path_buf(),
        categories: active_categories(&content),
    })
}

/// Read a whole log, mapping failures onto the input error kinds
fn read_log(input_path: &Path) -> Result<String> {
    fs::read_to_string(input_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SplitError::InputNotFound {
            path: input_path.to_path_buf(),
        },
        _ => SplitError::InputUnreadable {
            path: input_path.to_path_buf(),
            source,
        },
    })
}

/// File name of the log with the playback suffix removed
///
/// Names without the suffix are used whole.
pub fn output_stem(input_path: &Path, suffix: &str) -> String {
    let name = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(suffix) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Reject batches where two logs would write the same category files
///
/// Recursive discovery can find `run.playback` in several directories;
/// outputs are named by stem only, so the later log would overwrite the
/// earlier one.
pub fn check_unique_stems(files: &[PathBuf], suffix: &str) -> Result<()> {
    let mut seen: HashMap<String, &PathBuf> = HashMap::new();

    for file in files {
        let stem = output_stem(file, suffix);
        if let Some(first) = seen.get(&stem) {
            return Err(SplitError::Configuration {
                message: format!(
                    "{} and {} would both write outputs named '{}'",
                    first.display(),
                    file.display(),
                    stem
                ),
            });
        }
        seen.insert(stem, file);
    }

    Ok(())
}

/// Output paths a log would produce for the given categories
pub fn planned_outputs(report: &ScanReport, output_root: &Path, suffix: &str) -> Vec<PathBuf> {
    let stem = output_stem(&report.input_path, suffix);
    report
        .categories
        .iter()
        .map(|category| category.output_path(output_root, &stem))
        .collect()
}
