//! Command-line interface implementation for go-include.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;

use crate::config::Encoding;
use crate::constants::STDOUT_TARGET;

/// Command-line arguments structure for go-include.
#[derive(Parser, Debug)]
#[command(
    name = "go-include",
    author,
    version,
    about = "go-include creates a .go file containing the text or binary (base64) content of files specified by the glob pattern.",
    long_about = None,
    override_usage = "go-include [-o FILE] [-t (text|bin)] [FILE|GLOB]..."
)]
pub struct Args {
    /// Files or glob patterns to include. Reads standard input when omitted
    #[arg(value_name = "FILE|GLOB")]
    pub patterns: Vec<String>,

    /// Filename of generated output, '-' for standard output.
    /// A .go extension is appended when missing
    #[arg(short, long, value_name = "FILE", default_value = STDOUT_TARGET)]
    pub output: String,

    /// Type of the input file(s)
    #[arg(short = 't', long = "type", value_enum, default_value_t = Encoding::Text)]
    pub encoding: Encoding,

    /// Prefix constant names with the source's directories (res/gopher.png -> Res_gopher)
    #[arg(long)]
    pub with_dir: bool,

    /// Suffix constant names with the source's extension (gopher.png -> Gopher_png)
    #[arg(long)]
    pub with_ext: bool,

    /// Generate unexported constant names (gopher.png -> gopher)
    #[arg(long)]
    pub unexported: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments, `-h` or `-V`
pub fn get_args() -> Args {
    Args::parse()
}
