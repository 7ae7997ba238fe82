use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::SinkError;

/// Failures that abort a whole run. Record-level problems never end up here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input file could not be opened at path [{}]: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: io::Error
    },
    #[error("Output file could not be created at path [{}]: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: io::Error
    },
    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),
    #[error("Failed to write output: {0}")]
    Write(#[from] SinkError)
}
