//! Builds one generated constant per source: derives its Go identifier
//! and encodes its content for a raw string literal.

use std::io::Read;
use std::path::{Component, Path};
use std::string::FromUtf8Error;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::config::{Encoding, NamingOptions};
use crate::error::{Error, Result};
use crate::resolver::Source;

/// Replacement for a back-tick inside a Go raw string literal: close the
/// literal, concatenate an interpreted back-tick, reopen the literal.
pub const ESCAPED_BACKTICK: &str = "` + \"`\" + `";

/// One generated constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub content: String,
    pub comment: String,
}

impl Entry {
    /// Reads `source` and turns it into an entry.
    ///
    /// # Arguments
    /// * `source` - File or standard input to embed
    /// * `stdin` - Reader used when `source` is standard input
    /// * `encoding` - How the content is embedded
    /// * `naming` - Name derivation options
    ///
    /// # Errors
    /// * `Error::ReadError` if the source cannot be read
    /// * `Error::EncodingError` if a text source is not UTF-8
    pub fn build(
        source: &Source,
        stdin: &mut dyn Read,
        encoding: Encoding,
        naming: NamingOptions,
    ) -> Result<Self> {
        let bytes = read_source(source, stdin)?;
        let content = encode(bytes, encoding).map_err(|_| Error::EncodingError {
            path: source.to_string(),
        })?;
        let name = derive_name(source.path(), naming);
        let comment = format!("{} was sourced from {} file {}", name, encoding, source);

        Ok(Self {
            name,
            content,
            comment,
        })
    }
}

fn read_source(source: &Source, stdin: &mut dyn Read) -> Result<Vec<u8>> {
    let read = match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf).map(|_| buf)
        }
        Source::File(path) => std::fs::read(path),
    };
    read.map_err(|e| Error::ReadError {
        path: source.to_string(),
        source: e,
    })
}

/// Encodes raw content for embedding.
///
/// Text content must be UTF-8.
pub fn encode(bytes: Vec<u8>, encoding: Encoding) -> std::result::Result<String, FromUtf8Error> {
    match encoding {
        Encoding::Bin => Ok(STANDARD.encode(bytes)),
        Encoding::Text => String::from_utf8(bytes).map(|text| escape_backticks(&text)),
    }
}

pub fn escape_backticks(text: &str) -> String {
    text.replace('`', ESCAPED_BACKTICK)
}

/// Inverse of [`escape_backticks`].
pub fn unescape_backticks(literal: &str) -> String {
    literal.replace(ESCAPED_BACKTICK, "`")
}

/// Derives the constant name for `path`.
///
/// The base is the file name without its final extension. `with_dir` prefixes
/// the parent directories and `with_ext` suffixes the extension, both joined
/// with `_`. The result is title-cased, then lower-cased at the first
/// character when `unexported` is set.
pub fn derive_name(path: &Path, naming: NamingOptions) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_extension(&file_name);

    let mut parts: Vec<String> = Vec::new();
    if naming.with_dir {
        if let Some(parent) = path.parent() {
            parts.extend(parent.components().filter_map(|c| match c {
                Component::Normal(dir) => Some(dir.to_string_lossy().into_owned()),
                _ => None,
            }));
        }
    }
    parts.push(stem.to_string());
    if naming.with_ext && !ext.is_empty() {
        parts.push(ext.to_string());
    }

    let name = title_case(&parts.join("_"));
    if naming.unexported {
        lower_first(&name)
    } else {
        name
    }
}

/// Splits at the last `.`, so `archive.tar.gz` gives `("archive.tar", "gz")`
/// and `.bashrc` gives `("", "bashrc")`.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
        None => (file_name, ""),
    }
}

/// ASCII letters, digits and `_` join words, as do all non-ASCII letters and
/// digits. Other ASCII characters and any whitespace separate them.
fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

/// Upper-cases the first letter of every word, leaving everything else as is.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_separator = true;
    for c in s.chars() {
        if prev_separator {
            out.push(to_title(c));
        } else {
            out.push(c);
        }
        prev_separator = is_word_separator(c);
    }
    out
}

/// Single-character titlecase mapping.
///
/// Digraphs and Greek letters with iota subscript have a titlecase form
/// distinct from their uppercase one. Otherwise the uppercase form is used
/// when it is a single character, and the character is kept as is when
/// uppercasing would expand it (`ß` stays `ß`).
fn to_title(c: char) -> char {
    let title = match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => Some(c),
        '\u{1FB3}' | '\u{1FBC}' => Some('\u{1FBC}'),
        '\u{1FC3}' | '\u{1FCC}' => Some('\u{1FCC}'),
        '\u{1FF3}' | '\u{1FFC}' => Some('\u{1FFC}'),
        _ => None,
    };
    title.unwrap_or_else(|| single_char(c.to_uppercase(), c))
}

/// The mapped character, or `c` when the mapping is not exactly one char.
fn single_char(mut mapped: impl Iterator<Item = char>, c: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => c,
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        // `İ` is the one letter whose full lowercase expands; its simple form is `i`.
        Some(first) => first
            .to_lowercase()
            .next()
            .into_iter()
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}
