//! Category CSV writers
//!
//! Opens one truncating CSV writer per active category, writes the
//! column header for categories that carry one, and appends rows.

use crate::constants::CATEGORY_HEADER;
use crate::error::{Result, SplitError};
use crate::models::{Category, CategoryOutput, LogRow};

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Open CSV file for one category
struct CategoryFile {
    path: PathBuf,
    writer: Writer<File>,
    rows_written: usize,
}

/// Writers for every category activated by the pre-scan
pub struct CategoryWriters {
    files: BTreeMap<Category, CategoryFile>,
}

impl CategoryWriters {
    /// Create directories and open a fresh file for each active category
    ///
    /// Existing files are truncated. Train and Switch files get the header
    /// line before any row.
    pub fn open(active: &[Category], output_root: &Path, stem: &str) -> Result<Self> {
        let mut files = BTreeMap::new();

        for &category in active {
            let path = category.output_path(output_root, stem);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|source| SplitError::OutputDirectory {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }

            let file = File::create(&path).map_err(|e| SplitError::output_io(&path, e))?;
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .quote_style(QuoteStyle::Necessary)
                .terminator(Terminator::CRLF)
                .from_writer(file);

            if category.has_header() {
                writer
                    .write_record(CATEGORY_HEADER)
                    .map_err(|e| SplitError::output_write(&path, e))?;
            }

            debug!("Opened {} writer at {}", category, path.display());
            files.insert(
                category,
                CategoryFile {
                    path,
                    writer,
                    rows_written: 0,
                },
            );
        }

        Ok(Self { files })
    }

    /// Append a row to one category file
    ///
    /// Rows for categories without an open writer are ignored.
    pub fn write_row(&mut self, category: Category, row: &LogRow) -> Result<bool> {
        let Some(file) = self.files.get_mut(&category) else {
            return Ok(false);
        };

        file.writer
            .write_record(row.record())
            .map_err(|e| SplitError::output_write(&file.path, e))?;
        file.rows_written += 1;

        Ok(true)
    }

    /// Flush and close every writer, returning the per-category outputs
    pub fn finish(self) -> Result<BTreeMap<Category, CategoryOutput>> {
        let mut outputs = BTreeMap::new();

        for (category, mut file) in self.files {
            file.writer
                .flush()
                .map_err(|e| SplitError::output_io(&file.path, e))?;

            debug!(
                "Closed {} writer: {} rows -> {}",
                category,
                file.rows_written,
                file.path.display()
            );
            outputs.insert(
                category,
                CategoryOutput {
                    path: file.path,
                    rows_written: file.rows_written,
                },
            );
        }

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(fields: &[Option<&str>]) -> LogRow {
        LogRow::new(fields.iter().map(|f| f.map(str::to_string)).collect())
    }

    #[test]
    fn test_header_only_for_train_and_switch() {
        let temp_dir = TempDir::new().unwrap();
        let active = [Category::Train, Category::Gate, Category::Switch];

        let writers = CategoryWriters::open(&active, temp_dir.path(), "run").unwrap();
        let outputs = writers.finish().unwrap();

        let header = "Timestamp,Source,System,Component,ID,Action,Attribute,Value,Code\r\n";
        let train = fs::read_to_string(&outputs[&Category::Train].path).unwrap();
        let switch = fs::read_to_string(&outputs[&Category::Switch].path).unwrap();
        let gate = fs::read_to_string(&outputs[&Category::Gate].path).unwrap();

        assert_eq!(train, header);
        assert_eq!(switch, header);
        assert_eq!(gate, "");
    }

    #[test]
    fn test_rows_are_crlf_and_sentinels_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut writers = CategoryWriters::open(&[Category::Gate], temp_dir.path(), "run").unwrap();

        assert!(writers
            .write_row(Category::Gate, &row(&[Some("t0"), Some("SRC"), None, Some("9")]))
            .unwrap());
        assert!(writers
            .write_row(Category::Gate, &row(&[Some("t1"), Some("a,b"), Some("x")]))
            .unwrap());

        let outputs = writers.finish().unwrap();
        let gate = &outputs[&Category::Gate];
        assert_eq!(gate.rows_written, 2);
        assert_eq!(
            gate.path,
            temp_dir.path().join("ato_gate").join("run_ato_gate.csv")
        );
        assert_eq!(
            fs::read_to_string(&gate.path).unwrap(),
            "t0,SRC,,9\r\nt1,\"a,b\",x\r\n"
        );
    }

    #[test]
    fn test_write_to_inactive_category_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let mut writers = CategoryWriters::open(&[Category::Gate], temp_dir.path(), "run").unwrap();

        let written = writers
            .write_row(Category::Train, &row(&[Some("t0"), Some("SRC")]))
            .unwrap();
        assert!(!written);
        assert!(!temp_dir.path().join("ato_train").exists());
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = Category::Ccu.output_path(temp_dir.path(), "run");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale contents\n").unwrap();

        let writers = CategoryWriters::open(&[Category::Ccu], temp_dir.path(), "run").unwrap();
        writers.finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_directory_creation_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the output root should be
        let blocked = temp_dir.path().join("blocked");
        fs::write(&blocked, "not a directory").unwrap();

        let result = CategoryWriters::open(&[Category::Panel], &blocked, "run");
        match result {
            Err(SplitError::OutputDirectory { path, .. }) => {
                assert_eq!(path, blocked.join("ato_panel"));
            }
            Err(other) => panic!("Expected OutputDirectory error, got {:?}", other),
            Ok(_) => panic!("Expected OutputDirectory error"),
        }
    }
}
