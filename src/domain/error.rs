//! Domain error types

use std::io;

use thiserror::Error;

/// Error when the status lines cannot be written
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}
