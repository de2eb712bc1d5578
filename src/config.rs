//! Run configuration for go-include.
//! Combines parsed command-line arguments with an explicitly passed
//! environment so nothing below `main` reads process globals.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use log::debug;

use crate::cli::Args;
use crate::constants::{DEFAULT_PACKAGE, PACKAGE_ENV, SOURCE_EXTENSION, STDOUT_TARGET};

/// How source content is embedded in the generated constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// UTF-8 text inside a raw string literal
    Text,
    /// Standard base64
    Bin,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Text => write!(f, "text"),
            Encoding::Bin => write!(f, "bin"),
        }
    }
}

/// Where the rendered source goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Interprets the `-o` argument. `-` selects standard output; any other
    /// name gets the `.go` extension appended when it is missing.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDOUT_TARGET {
            return OutputTarget::Stdout;
        }
        if arg.ends_with(SOURCE_EXTENSION) {
            OutputTarget::File(PathBuf::from(arg))
        } else {
            OutputTarget::File(PathBuf::from(format!("{}{}", arg, SOURCE_EXTENSION)))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "standard output"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options controlling how constant names are derived from file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingOptions {
    pub with_dir: bool,
    pub with_ext: bool,
    pub unexported: bool,
}

/// Immutable configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    pub patterns: Vec<String>,
    pub output: OutputTarget,
    pub encoding: Encoding,
    pub naming: NamingOptions,
    pub package: String,
}

impl Config {
    /// Builds the run configuration.
    ///
    /// # Arguments
    /// * `args` - Parsed command line arguments
    /// * `env` - Environment variables of the invoking process
    pub fn new(args: Args, env: &HashMap<String, String>) -> Self {
        let package = package_name(env);
        debug!("Generating package '{}'", package);

        Self {
            output: OutputTarget::from_arg(&args.output),
            patterns: args.patterns,
            encoding: args.encoding,
            naming: NamingOptions {
                with_dir: args.with_dir,
                with_ext: args.with_ext,
                unexported: args.unexported,
            },
            package,
        }
    }
}

/// Returns the package named by `GOPACKAGE`, or `main` when it is unset.
pub fn package_name(env: &HashMap<String, String>) -> String {
    env.get(PACKAGE_ENV)
        .cloned()
        .unwrap_or_else(|| DEFAULT_PACKAGE.to_string())
}
