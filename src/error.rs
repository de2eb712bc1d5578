//! Error handling for go-include.
//! Defines the error type and result alias used throughout the pipeline.

use std::io;
use thiserror::Error;

/// Error types for go-include operations.
///
/// Only `NoFilesError` and the output/template variants stop a run. The
/// per-pattern and per-source variants are logged by the generator and the
/// offending input is skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur while writing the generated output
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The glob pattern has invalid syntax
    #[error("Invalid glob pattern '{pattern}': {source}.")]
    PatternError {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The glob pattern is valid but matched nothing
    #[error("Found no files matching '{pattern}'.")]
    NoMatchError { pattern: String },

    /// A path could not be inspected while expanding a pattern
    #[error("Error while expanding '{pattern}': {source}.")]
    GlobError {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },

    /// A source could not be read
    #[error("Could not open {path}: {source}.")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A text source is not valid UTF-8
    #[error("{path} is not valid UTF-8 text, use '-t bin' to embed it as base64.")]
    EncodingError { path: String },

    /// None of the command-line patterns resolved to a file
    #[error("Found no files matching glob(s) {}.", .patterns.join(" "))]
    NoFilesError { patterns: Vec<String> },

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The generation context could not be converted into template values
    #[error("Serialization error: {0}.")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("include: error: {}", err);
    std::process::exit(1);
}
