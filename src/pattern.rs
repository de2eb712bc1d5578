//! Translation of Go `filepath.Match` patterns into `glob` crate syntax.
//!
//! The two dialects differ in a few places:
//! - Go negates a class with `[^...]`, `glob` with `[!...]`; a leading `!` is
//!   a literal in Go.
//! - Go escapes any character with `\` (except on Windows, where `\` is a
//!   separator); `glob` only knows bracket quoting such as `[*]`.
//! - Inside a Go class, `-` and `]` are only literal when escaped; `glob`
//!   takes them literally by position.
//! - Go has no recursive `**`; a run of stars is a single `*`.

use glob::PatternError;

/// Whether `\` quotes the next character.
const ESCAPES: bool = !cfg!(windows);

/// A member of a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

fn bad_pattern(pos: usize, msg: &'static str) -> PatternError {
    PatternError { pos, msg }
}

/// Converts a Go glob pattern into an equivalent `glob` crate pattern.
///
/// # Errors
/// Returns a `PatternError` where Go's `filepath.Match` reports
/// `ErrBadPattern`: a dangling escape, an unterminated or empty class, or an
/// unescaped `-`/`]` inside a class.
pub fn translate_pattern(pattern: &str) -> Result<String, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push('*');
                continue;
            }
            '?' => out.push('?'),
            '[' => {
                let (negated, items, next) = parse_class(&chars, i + 1)?;
                out.push_str(&render_class(negated, items));
                i = next;
                continue;
            }
            '\\' if ESCAPES => {
                i += 1;
                let escaped = *chars.get(i).ok_or_else(|| bad_pattern(i, "dangling escape"))?;
                push_literal(&mut out, escaped);
            }
            c => push_literal(&mut out, c),
        }
        i += 1;
    }
    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    match c {
        '*' | '?' | '[' | ']' => {
            out.push('[');
            out.push(c);
            out.push(']');
        }
        _ => out.push(c),
    }
}

/// Parses a class body starting just after `[`. Returns the negation flag,
/// the members and the index after the closing `]`.
fn parse_class(chars: &[char], start: usize) -> Result<(bool, Vec<ClassItem>, usize), PatternError> {
    let mut i = start;
    let negated = chars.get(i) == Some(&'^');
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    loop {
        match chars.get(i) {
            None => return Err(bad_pattern(start - 1, "unterminated character class")),
            Some(']') if !items.is_empty() => return Ok((negated, items, i + 1)),
            _ => {}
        }
        let (lo, next) = class_char(chars, i)?;
        i = next;
        if chars.get(i) == Some(&'-') {
            let (hi, next) = class_char(chars, i + 1)?;
            i = next;
            items.push(ClassItem::Range(lo, hi));
        } else {
            items.push(ClassItem::Char(lo));
        }
    }
}

/// Reads one, possibly escaped, class character.
fn class_char(chars: &[char], i: usize) -> Result<(char, usize), PatternError> {
    match chars.get(i) {
        None => Err(bad_pattern(i, "unterminated character class")),
        Some('-') | Some(']') => Err(bad_pattern(i, "unescaped '-' or ']' in character class")),
        Some('\\') if ESCAPES => chars
            .get(i + 1)
            .map(|&c| (c, i + 2))
            .ok_or_else(|| bad_pattern(i, "dangling escape")),
        Some(&c) => Ok((c, i + 1)),
    }
}

/// Characters `glob` reads by position inside a class.
fn is_positional(c: char) -> bool {
    matches!(c, '!' | '-' | ']')
}

fn step(c: char, up: bool) -> Option<char> {
    let code = c as u32;
    let next = if up { code.checked_add(1)? } else { code.checked_sub(1)? };
    char::from_u32(next)
}

/// Peels positional characters off range endpoints so every range can be
/// written as `lo-hi` in any position.
fn split_ranges(items: Vec<ClassItem>) -> Vec<ClassItem> {
    let mut pending = items;
    let mut done = Vec::new();
    while let Some(item) = pending.pop() {
        match item {
            ClassItem::Range(lo, hi) if lo > hi => {
                // Empty range; matches nothing in either dialect.
                if !is_positional(lo) && !is_positional(hi) {
                    done.push(item);
                }
            }
            ClassItem::Range(lo, hi) if lo == hi => done.push(ClassItem::Char(lo)),
            ClassItem::Range(lo, hi) if is_positional(lo) => {
                done.push(ClassItem::Char(lo));
                if let Some(lo) = step(lo, true) {
                    pending.push(ClassItem::Range(lo, hi));
                }
            }
            ClassItem::Range(lo, hi) if is_positional(hi) => {
                done.push(ClassItem::Char(hi));
                if let Some(hi) = step(hi, false) {
                    pending.push(ClassItem::Range(lo, hi));
                }
            }
            other => done.push(other),
        }
    }
    done.reverse();
    done
}

/// Writes a class in `glob` syntax: `]` first, `!` never first unless it
/// negates, `-` last.
fn render_class(negated: bool, items: Vec<ClassItem>) -> String {
    let items = split_ranges(items);
    let has = |c: char| items.contains(&ClassItem::Char(c));

    let mut body = String::new();
    if has(']') {
        body.push(']');
    }
    for item in &items {
        match *item {
            ClassItem::Char(c) if is_positional(c) => {}
            ClassItem::Char(c) => body.push(c),
            ClassItem::Range(lo, hi) => {
                body.push(lo);
                body.push('-');
                body.push(hi);
            }
        }
    }
    let bang = has('!');
    let dash = has('-');

    if body.is_empty() && !negated {
        return match (bang, dash) {
            (false, false) => "[b-a]".to_string(),
            (true, false) => "!".to_string(),
            (false, true) => "-".to_string(),
            (true, true) => "[-!]".to_string(),
        };
    }
    if body.is_empty() && !bang && !dash {
        // Negated class whose members are all empty ranges.
        return "?".to_string();
    }

    let mut out = String::from("[");
    if negated {
        out.push('!');
    }
    if body.is_empty() && bang {
        // Only reachable when negated: "[!" already opened the class.
        out.push('!');
    } else {
        out.push_str(&body);
        if bang {
            out.push('!');
        }
    }
    if dash {
        out.push('-');
    }
    out.push(']');
    out
}
