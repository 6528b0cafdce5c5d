//! Property text parsing.
//!
//! Parses flat `key=value` configuration text into an ordered mapping, per
//! the usual property-file conventions:
//!
//! - one logical entry per line, key and value separated by `=` or `:`
//!   (whitespace around the separator is ignored; a line with no separator
//!   maps the whole line to an empty value)
//! - blank lines and lines starting with `#` or `!` are skipped
//! - a trailing backslash continues the entry onto the next physical line,
//!   with the continuation's leading whitespace stripped
//! - `\t`, `\n`, `\r`, `\f`, `\\` and `\uXXXX` escapes in keys and values;
//!   any other escaped character stands for itself
//!
//! Malformed `\u` escapes and a continuation with no following line fail
//! with [`PropertyParseError`]; nothing is returned on failure. Duplicate
//! keys keep the position of their first occurrence and the value of their
//! last.

use crate::error::PropertyParseError;

/// Parses property text into an ordered key/value mapping.
pub fn parse(text: &str) -> Result<Vec<(String, String)>, PropertyParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries: Vec<(String, String)> = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let lineno = idx + 1;
        let trimmed = lines[idx].trim_start();
        idx += 1;

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            let Some(next) = lines.get(idx) else {
                return Err(PropertyParseError::new(idx, "unterminated line continuation"));
            };
            logical.push_str(next.trim_start());
            idx += 1;
        }

        let (key, value) = split_entry(&logical, lineno)?;
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => entries.push((key, value)),
        }
    }

    Ok(entries)
}

/// True if the logical line ends with an odd run of backslashes, i.e. the
/// final backslash escapes the line terminator rather than another backslash.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits one logical line into an unescaped key and value.
fn split_entry(line: &str, lineno: usize) -> Result<(String, String), PropertyParseError> {
    let cs: Vec<char> = line.chars().collect();
    let mut key = String::new();
    let mut i = 0;
    let mut separated = false;

    while i < cs.len() {
        match cs[i] {
            '\\' => {
                i += 1;
                key.push(unescape_at(&cs, &mut i, lineno)?);
            }
            '=' | ':' => {
                separated = true;
                i += 1;
                break;
            }
            c => {
                key.push(c);
                i += 1;
            }
        }
    }

    if !separated {
        return Ok((key.trim_end().to_string(), String::new()));
    }

    while i < cs.len() && cs[i].is_whitespace() {
        i += 1;
    }

    let mut value = String::new();
    while i < cs.len() {
        match cs[i] {
            '\\' => {
                i += 1;
                value.push(unescape_at(&cs, &mut i, lineno)?);
            }
            c => {
                value.push(c);
                i += 1;
            }
        }
    }

    Ok((key.trim_end().to_string(), value))
}

/// Consumes one escape sequence. `i` points just past the backslash and is
/// advanced past the sequence.
fn unescape_at(cs: &[char], i: &mut usize, lineno: usize) -> Result<char, PropertyParseError> {
    let Some(&c) = cs.get(*i) else {
        // Continuation handling consumes trailing backslashes before this
        // runs, so a dangling escape means the input was inconsistent.
        return Err(PropertyParseError::new(lineno, "dangling escape at end of line"));
    };
    *i += 1;
    Ok(match c {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\u{000C}',
        'u' => {
            if *i + 4 > cs.len() {
                return Err(PropertyParseError::new(lineno, "truncated \\u escape"));
            }
            let hex: String = cs[*i..*i + 4].iter().collect();
            let code = u32::from_str_radix(&hex, 16).map_err(|_| {
                PropertyParseError::new(lineno, format!("invalid hex digits in \\u escape: {hex:?}"))
            })?;
            *i += 4;
            char::from_u32(code).ok_or_else(|| {
                PropertyParseError::new(lineno, format!("\\u{hex} is not a valid code point"))
            })?
        }
        other => other,
    })
}
