//! Expands command-line patterns into the ordered list of sources to embed.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::STDIN_PATH;
use crate::error::{Error, Result};
use crate::pattern::translate_pattern;

/// A single input to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Path used to derive the constant name and to describe the source.
    pub fn path(&self) -> &Path {
        match self {
            Source::Stdin => Path::new(STDIN_PATH),
            Source::File(path) => path,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Outcome of resolving the command-line patterns.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Sources in argument order, then glob order within each pattern
    pub sources: Vec<Source>,
    /// Non-fatal problems met along the way
    pub problems: Vec<Error>,
}

impl Resolution {
    /// Number of patterns that were reported and dropped. Unreadable entries
    /// met while expanding a pattern do not count, the pattern still applies.
    pub fn skipped_patterns(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| matches!(p, Error::PatternError { .. } | Error::NoMatchError { .. }))
            .count()
    }
}

/// Expands one Go-syntax pattern into the paths it matches, in sorted order.
///
/// # Errors
/// * `Error::PatternError` if the pattern syntax is invalid
/// * `Error::NoMatchError` if nothing matches
///
/// Entries that cannot be inspected are returned alongside the matches
/// as `Error::GlobError`.
pub fn expand_pattern(pattern: &str) -> Result<(Vec<PathBuf>, Vec<Error>)> {
    let paths = translate_pattern(pattern)
        .and_then(|translated| {
            debug!("Pattern '{}' expands as '{}'", pattern, translated);
            glob::glob(&translated)
        })
        .map_err(|source| Error::PatternError {
            pattern: pattern.to_string(),
            source,
        })?;

    let mut matches = Vec::new();
    let mut problems = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matches.push(path),
            Err(source) => problems.push(Error::GlobError {
                pattern: pattern.to_string(),
                source,
            }),
        }
    }

    if matches.is_empty() && problems.is_empty() {
        return Err(Error::NoMatchError {
            pattern: pattern.to_string(),
        });
    }
    Ok((matches, problems))
}

/// Resolves all patterns into sources.
///
/// Without patterns standard input is the sole source. Matches are not
/// deduplicated, so overlapping patterns contribute the same file twice.
/// An empty `sources` list with non-empty `patterns` means nothing resolved.
pub fn resolve_sources(patterns: &[String]) -> Resolution {
    if patterns.is_empty() {
        debug!("No patterns given, reading standard input");
        return Resolution {
            sources: vec![Source::Stdin],
            problems: Vec::new(),
        };
    }

    let mut resolution = Resolution::default();
    for pattern in patterns {
        match expand_pattern(pattern) {
            Ok((matches, problems)) => {
                debug!("Pattern '{}' matched {} path(s)", pattern, matches.len());
                resolution
                    .sources
                    .extend(matches.into_iter().map(Source::File));
                resolution.problems.extend(problems);
            }
            Err(e) => resolution.problems.push(e),
        }
    }
    resolution
}
