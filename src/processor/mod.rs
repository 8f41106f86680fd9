//! Batch processing of playback logs.
//!
//! Discovers the logs in the input directory and splits them one after
//! another into category CSV files, reporting each completed file and a
//! final summary.

pub mod classifier;
pub mod discovery;
pub mod splitter;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::discovery::FileDiscovery;
use self::splitter::{check_unique_stems, planned_outputs, scan_log_file, split_log_file};

use crate::config::SplitterConfig;
use crate::error::Result;
use crate::models::{ProcessingStats, ScanReport, SplitStats};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// Main processor for a directory of playback logs
#[derive(Debug)]
pub struct LogProcessor {
    config: SplitterConfig,
    file_discovery: FileDiscovery,
}

impl LogProcessor {
    /// Create a processor for the given configuration
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate()?;

        let file_discovery = FileDiscovery::new(config.input_dir.clone(), &config.file_suffix)?
            .recursive(config.recursive);

        Ok(Self {
            config,
            file_discovery,
        })
    }

    /// Main processing entry point
    ///
    /// Unreadable or vanished logs are reported and counted as failed;
    /// any failure creating or writing output stops the run.
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        println!("{}", "Splitting ATO playback logs".bright_green().bold());
        println!(
            "  {} {}",
            "Input:".bright_cyan(),
            self.config.input_dir.display()
        );
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            self.config.output_dir.display()
        );

        let files = self.file_discovery.discover_playback_files()?;
        println!(
            "  {} {} playback files",
            "Found".bright_green(),
            files.len().to_string().bright_white().bold()
        );

        check_unique_stems(&files, &self.config.file_suffix)?;

        let mut stats = ProcessingStats {
            output_path: self.config.output_dir.clone(),
            ..Default::default()
        };

        if files.is_empty() {
            stats.processing_time_ms = start_time.elapsed().as_millis();
            return Ok(stats);
        }

        if self.config.scan_only {
            self.report_scan(&files, &mut stats);
            stats.processing_time_ms = start_time.elapsed().as_millis();
            return Ok(stats);
        }

        let pb = self.progress_bar(files.len());

        for input_path in &files {
            pb.set_message(file_label(input_path));

            match split_log_file(input_path, &self.config.output_dir, &self.config.file_suffix) {
                Ok(split) => {
                    info!(
                        "Processed {} ({} rows into {} categories)",
                        input_path.display(),
                        split.total_rows(),
                        split.outputs.len()
                    );
                    report_line(&pb, completion_message(&split));
                    stats.files_processed += 1;
                    stats.total_rows += split.total_rows();
                    stats.completed_files.push(split.input_path);
                }
                Err(e) if e.is_input_error() => {
                    error!("Skipping {}: {}", input_path.display(), e);
                    stats.files_failed += 1;
                }
                Err(e) => {
                    pb.abandon_with_message("Aborted");
                    return Err(e);
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("Processing complete");

        stats.processing_time_ms = start_time.elapsed().as_millis();
        self.print_summary(&stats);

        Ok(stats)
    }

    /// Pre-scan every log and print the files each would produce
    fn report_scan(&self, files: &[PathBuf], stats: &mut ProcessingStats) {
        println!("\n{}", "Scan only - no files written".bright_yellow());

        for input_path in files {
            match scan_log_file(input_path) {
                Ok(report) => {
                    self.print_scan_report(&report);
                    stats.files_processed += 1;
                }
                Err(e) => {
                    error!("Skipping {}: {}", input_path.display(), e);
                    stats.files_failed += 1;
                }
            }
        }
    }

    fn print_scan_report(&self, report: &ScanReport) {
        println!("  {}", report.input_path.display().to_string().bright_white());
        if report.categories.is_empty() {
            println!("    {}", "no ATO categories".bright_black());
            return;
        }

        let planned = planned_outputs(report, &self.config.output_dir, &self.config.file_suffix);
        for (category, path) in report.categories.iter().zip(planned) {
            println!(
                "    {:<12} {}",
                category.to_string().bright_cyan(),
                path.display()
            );
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    fn print_summary(&self, stats: &ProcessingStats) {
        println!("\n{}", "Processing Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Files processed:".bright_cyan(),
            stats.files_processed.to_string().bright_white()
        );
        if stats.files_failed > 0 {
            println!(
                "  {} {}",
                "Files failed:".bright_red(),
                stats.files_failed.to_string().bright_red().bold()
            );
        }
        println!(
            "  {} {}",
            "Total rows:".bright_cyan(),
            stats.total_rows.to_string().bright_white().bold()
        );
    }
}

/// Console line announcing a finished log
pub fn completion_message(split: &SplitStats) -> String {
    format!(
        "  {} {} ({} rows)",
        "Processed".bright_green(),
        split.input_path.display(),
        split.total_rows()
    )
}

/// Print above the progress bar, or straight to stdout when it is hidden
fn report_line(pb: &ProgressBar, line: String) {
    if pb.is_hidden() {
        println!("{}", line);
    } else {
        pb.println(line);
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
