//! Common constants used throughout go-include.

/// Output target meaning "write to standard output"
pub const STDOUT_TARGET: &str = "-";

/// Extension appended to output file names that lack it
pub const SOURCE_EXTENSION: &str = ".go";

/// Environment variable set by `go generate` to the invoking package's name
pub const PACKAGE_ENV: &str = "GOPACKAGE";

/// Package used when `GOPACKAGE` is unset
pub const DEFAULT_PACKAGE: &str = "main";

/// Path reported for standard input, both in comments and for name derivation
pub const STDIN_PATH: &str = "/dev/stdin";
