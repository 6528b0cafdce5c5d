//! Escaping for `cmd.exe` shell indirection.
//!
//! On Windows a batch file cannot hand its exit code straight back to the
//! caller, so the whole argument list is wrapped into a single
//! `cmd.exe /C "<command> && exit %%ERRORLEVEL%%"` invocation. Because the
//! command now travels as one string through the shell, every argument must
//! be escaped so that `cmd.exe` parses the string back into the original
//! argument boundaries:
//!
//! - an argument is wrapped in double quotes on demand, triggered by the
//!   first space, `*`, `?` or `;` (or by any character below)
//! - the metacharacters `^ & < > |` get a `^` prepended even inside quotes
//! - a literal `"` is doubled
//! - a letter directly after `%` is wrapped in quotes in place, so `%foo%`
//!   becomes `"%"f"oo%"` and the shell never sees a `%name%` variable
//!   reference to expand
//!
//! The doubled percent in the `exit %%ERRORLEVEL%%` suffix defers expansion
//! until after the wrapped command has run.

use tracing::debug;

use crate::builder::ArgumentListBuilder;

/// Suffix that makes `cmd.exe` exit with the wrapped command's exit code.
const EXIT_SUFFIX: &str = "&& exit %%ERRORLEVEL%%";

/// Wraps `builder`'s arguments into a three-argument `cmd.exe /C` command.
///
/// The result is a structurally new builder holding exactly
/// `["cmd.exe", "/C", "\"<escaped>\""]` with nothing masked: the input's
/// mask does not carry over, since its positions have no meaning in the
/// collapsed single-string form. Callers that still need redaction must
/// re-derive it for the escaped string.
pub fn to_windows_command(builder: &ArgumentListBuilder) -> ArgumentListBuilder {
    let mut escaped = String::new();
    for arg in builder.iter() {
        escape_argument(&mut escaped, arg);
        escaped.push(' ');
    }
    escaped.push_str(EXIT_SUFFIX);

    debug!("wrapped {} argument(s) into a cmd.exe /C command", builder.len());

    let mut wrapped = ArgumentListBuilder::from_args(["cmd.exe", "/C"]);
    wrapped.add_quoted(escaped);
    wrapped
}

/// Escapes one argument into `out`, quoting on demand.
///
/// Nothing is emitted until quoting starts; an argument that never trips a
/// special character is appended verbatim at the end.
fn escape_argument(out: &mut String, arg: &str) {
    let mut quoted = false;
    let mut percent = false;

    for (i, ch) in arg.char_indices() {
        let mut c = ch;
        if !quoted && matches!(c, ' ' | '*' | '?' | ';') {
            quoted = start_quoting(out, arg, i);
        } else if matches!(c, '^' | '&' | '<' | '>' | '|') {
            if !quoted {
                quoted = start_quoting(out, arg, i);
            }
            out.push('^');
        } else if c == '"' {
            if !quoted {
                quoted = start_quoting(out, arg, i);
            }
            out.push('"');
        } else if percent && c.is_ascii_alphabetic() {
            if !quoted {
                quoted = start_quoting(out, arg, i);
            }
            // Quote-wrap the letter in place; the closing quote becomes the
            // character emitted below.
            out.push('"');
            out.push(c);
            c = '"';
        }
        percent = c == '%';
        if quoted {
            out.push(c);
        }
    }

    if quoted {
        out.push('"');
    } else {
        out.push_str(arg);
    }
}

/// Opens the quote for `arg`, emitting the prefix scanned so far.
fn start_quoting(out: &mut String, arg: &str, at: usize) -> bool {
    out.push('"');
    out.push_str(&arg[..at]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(arg: &str) -> String {
        let mut out = String::new();
        escape_argument(&mut out, arg);
        out
    }

    #[test]
    fn test_plain_argument_untouched() {
        assert_eq!(escaped("-Dkey=value"), "-Dkey=value");
    }

    #[test]
    fn test_space_triggers_quoting() {
        assert_eq!(escaped("a b"), "\"a b\"");
    }

    #[test]
    fn test_metacharacters_caret_escaped() {
        assert_eq!(escaped("a&b"), "\"a^&b\"");
        assert_eq!(escaped("a|b<c>d"), "\"a^|b^<c^>d\"");
        assert_eq!(escaped("a^b"), "\"a^^b\"");
    }

    #[test]
    fn test_quote_doubled() {
        assert_eq!(escaped("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_percent_variable_reference_broken_up() {
        assert_eq!(escaped("%foo%"), "\"%\"f\"oo%\"");
    }

    #[test]
    fn test_percent_not_followed_by_letter_untouched() {
        assert_eq!(escaped("100%"), "100%");
        assert_eq!(escaped("50%2"), "50%2");
    }
}
