//! Command-line interface components.

use crate::config::SplitterConfig;
use crate::constants::{DEFAULT_FILE_SUFFIX, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, LOG_TARGET};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ato-log-splitter")]
#[command(about = "Split ATO playback logs into per-category CSV files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing playback logs
    #[arg(short, long = "input", value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Root directory for the ato_* category folders
    #[arg(short, long = "output", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name suffix identifying playback logs
    #[arg(long, default_value = DEFAULT_FILE_SUFFIX)]
    pub suffix: String,

    /// Also process logs in sub-directories of the input directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Report the categories each log would produce without writing files
    #[arg(long)]
    pub scan_only: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Map verbosity flags to a tracing level
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the runtime configuration from the parsed flags
    pub fn to_config(&self) -> SplitterConfig {
        let mut config = SplitterConfig::default()
            .with_input_dir(&self.input_dir)
            .with_output_dir(&self.output_dir)
            .with_file_suffix(&self.suffix);

        if self.recursive {
            config = config.with_recursive();
        }
        if self.scan_only {
            config = config.with_scan_only();
        }
        if self.quiet {
            config = config.without_progress();
        }
        config
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!("Logging initialized at level: {}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ato-log-splitter"]);
        assert_eq!(args.input_dir, PathBuf::from("logs"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.suffix, ".playback");
        assert!(!args.recursive);
        assert!(!args.scan_only);
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_log_levels() {
        let mut args = Args::parse_from(["ato-log-splitter", "-vv"]);
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");

        let quiet = Args::parse_from(["ato-log-splitter", "--quiet"]);
        assert_eq!(quiet.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["ato-log-splitter", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_config() {
        let args = Args::parse_from([
            "ato-log-splitter",
            "-i",
            "/data/logs",
            "-o",
            "/data/csv",
            "--suffix",
            ".log",
            "--recursive",
            "--scan-only",
            "-q",
        ]);
        let config = args.to_config();

        assert_eq!(config.input_dir, PathBuf::from("/data/logs"));
        assert_eq!(config.output_dir, PathBuf::from("/data/csv"));
        assert_eq!(config.file_suffix, ".log");
        assert!(config.recursive);
        assert!(config.scan_only);
        assert!(!config.show_progress);
    }
}
