//! go-include embeds files into a generated Go source file as string or
//! base64 constants, for use from `go generate`.

/// Command-line interface module for the go-include application
pub mod cli;

/// Run configuration built from arguments and the environment
pub mod config;

/// Shared constants
pub mod constants;

/// Constant name derivation and content encoding
pub mod entry;

/// Error types and handling for the go-include application
pub mod error;

/// Pipeline orchestration
pub mod generator;

/// Logger initialisation
pub mod logger;

/// Output destination handling
pub mod output;

/// Go glob syntax translation
pub mod pattern;

/// Template rendering of the generated source
pub mod renderer;

/// Glob expansion of command-line patterns
pub mod resolver;
