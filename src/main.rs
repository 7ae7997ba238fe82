mod config;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Config, USAGE};
use crate::engine::{Pipeline, RunSummary};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let pipeline = Pipeline::new();

    let timer = Instant::now();
    let summary = pipeline.run_files(&config.input, &config.output)
        .context("Product transformation run aborted")?;
    let duration = timer.elapsed();

    info!("Processed products in: {duration:?}");

    write_summary_to_stdout(&summary, &config.output)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout is reserved for the run summary, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(summary: &RunSummary, output_path: &Path) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "Run Summary:")?;
    writeln!(output, "Rows read: {}", summary.rows_read)?;
    writeln!(output, "Rows transformed: {}", summary.rows_transformed)?;
    writeln!(output, "Rows skipped: {}", summary.rows_skipped)?;
    writeln!(output, "Output written to: {}", output_path.display())?;

    output.flush()?;

    Ok(())
}
