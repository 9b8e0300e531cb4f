//! Error handling for pagegen.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors raised while loading configuration, rendering or writing components.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failures: permission denied, missing parent directory, disk full
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Template rendering failures
    #[error("Template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Invalid or unreadable manifest
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid `--only` pattern
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Interactive confirmation could not be read
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// At least one entry failed under the continue-on-error policy
    #[error("Generation failed: {failed} of {total} files could not be written")]
    GenerationFailed { failed: usize, total: usize },
}

/// Convenience type alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
