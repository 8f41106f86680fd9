use anyhow::Context;
use ato_log_splitter::LogProcessor;
use ato_log_splitter::cli::{Args, setup_logging};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();

    let processor = LogProcessor::new(config).context("Invalid configuration")?;
    processor.process().with_context(|| {
        format!(
            "Failed to split playback logs from {}",
            args.input_dir.display()
        )
    })?;

    Ok(())
}
