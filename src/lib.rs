//! ATO Log Splitter Library
//!
//! Splits line-oriented playback logs from an Automatic Train Operation
//! subsystem into one CSV file per log category (train, gate, switch,
//! track circuit and so on).
//!
//! This library provides tools for:
//! - Parsing playback lines into rows with joined timestamps and blanked sentinels
//! - Pre-scanning a log to decide which category files it needs
//! - Routing each row to every category whose keywords the line carries
//! - Discovering and batch-processing a directory of logs

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;

pub use config::SplitterConfig;
pub use error::{Result, SplitError};
pub use models::{Category, LogRow, ProcessingStats, ScanReport, SplitStats};
pub use processor::LogProcessor;
pub use processor::splitter::{scan_log_file, split_log_file};
