//! Ordered argument list with per-position secret masking.
//!
//! [`ArgumentListBuilder`] assembles the argument vector for an external
//! process invocation while tracking which positions hold sensitive values
//! (passwords and the like). Each argument carries its own secrecy flag, so
//! structural edits such as [`ArgumentListBuilder::prepend`] can never leave
//! the mask pointing at the wrong position: the flag travels with its
//! argument.
//!
//! Consumers take [`ArgumentListBuilder::to_args`] for the process API and
//! [`ArgumentListBuilder::to_mask_array`] to redact before logging; the two
//! vectors always have the same length.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PropertyParseError;
use crate::resolve::{VariableResolver, replace_macros};
use crate::tokenize::tokenize;
use crate::windows;

/// Replacement text for masked arguments in redacted output.
const REDACTED: &str = "******";

/// One argument and whether it must be redacted before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Argument {
    value: String,
    secret: bool,
}

impl Argument {
    fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            secret: false,
        }
    }
}

/// Builder for a process argument vector with secret masking.
///
/// Mutation methods return `&mut Self` so calls can be chained. The builder
/// is a plain value: it is owned by one caller, mutated freely, and exported
/// when done. [`Clone`] yields a fully independent copy that keeps the mask
/// state of the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentListBuilder {
    args: Vec<Argument>,
}

impl ArgumentListBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-seeded with `args`, none of them masked.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Argument::plain).collect(),
        }
    }

    /// Appends one argument.
    pub fn add(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(Argument::plain(arg));
        self
    }

    /// Appends every argument from `args`.
    pub fn add_all<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Argument::plain));
        self
    }

    /// Appends a path as one argument.
    pub fn add_path(&mut self, path: impl AsRef<Utf8Path>) -> &mut Self {
        self.add(path.as_ref().as_str())
    }

    /// Appends an argument wrapped in literal double quotes.
    ///
    /// Needed only for remote-shell style invocations (ssh, rsh) that
    /// re-parse the whole command line as one string. Normal process
    /// invocation passes each argument separately and must not use this:
    /// the quotes would become part of the argument.
    pub fn add_quoted(&mut self, arg: impl Into<String>) -> &mut Self {
        self.add(format!("\"{}\"", arg.into()))
    }

    /// Appends an argument and marks its position as secret.
    pub fn add_masked(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(Argument {
            value: arg.into(),
            secret: true,
        });
        self
    }

    /// Splits `text` on whitespace and appends each token as its own
    /// argument. Empty or all-whitespace text is a no-op. No quote grouping
    /// is applied; see [`crate::tokenize`].
    pub fn add_tokenized(&mut self, text: &str) -> &mut Self {
        self.add_all(tokenize(text))
    }

    /// Appends one `prefix + key + "=" + value` argument per pair, in the
    /// order given.
    pub fn add_key_value_pairs<I, K, V>(&mut self, prefix: &str, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.add(format!("{prefix}{}={}", key.as_ref(), value.as_ref()));
        }
        self
    }

    /// Parses `properties` (`key=value` per line, see [`crate::properties`])
    /// and appends one `prefix + key + "=" + value` argument per entry, with
    /// `$VAR`/`${VAR}` references in each value expanded through `resolver`.
    ///
    /// `None` is a no-op. On a parse error nothing is appended.
    pub fn add_key_value_pairs_from_property_string(
        &mut self,
        prefix: &str,
        properties: Option<&str>,
        resolver: &dyn VariableResolver,
    ) -> Result<&mut Self, PropertyParseError> {
        let Some(text) = properties else {
            return Ok(self);
        };
        let entries = crate::properties::parse(text)?;
        debug!("appending {} key/value pair(s) with prefix {:?}", entries.len(), prefix);
        for (key, value) in entries {
            self.add(format!("{prefix}{key}={}", replace_macros(&value, resolver)));
        }
        Ok(self)
    }

    /// Inserts `args` before all existing arguments, keeping the relative
    /// order of both the new prefix and the existing suffix. The new
    /// arguments are never masked; existing masks stay on their arguments.
    pub fn prepend<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.splice(0..0, args.into_iter().map(Argument::plain));
        self
    }

    /// Removes every argument (and with them, every mask flag).
    pub fn clear(&mut self) {
        self.args.clear();
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// True if the builder holds no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterates over the argument values in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| a.value.as_str())
    }

    /// Exports the argument vector for a process-invocation API.
    pub fn to_args(&self) -> Vec<String> {
        self.args.iter().map(|a| a.value.clone()).collect()
    }

    /// True if at least one argument is masked.
    pub fn has_masked(&self) -> bool {
        self.args.iter().any(|a| a.secret)
    }

    /// Exports the mask as a boolean vector parallel to [`Self::to_args`]:
    /// `true` at every masked position.
    pub fn to_mask_array(&self) -> Vec<bool> {
        self.args.iter().map(|a| a.secret).collect()
    }

    /// Renders the arguments as one line, quoting only arguments that
    /// contain a space or are empty.
    ///
    /// This does NOT redact masked arguments. It exists for informational
    /// output where the caller has already consulted [`Self::has_masked`];
    /// prefer [`Self::to_redacted_string`] for anything written to a log.
    pub fn to_quoted_string(&self) -> String {
        let mut buf = String::new();
        for arg in &self.args {
            if !buf.is_empty() {
                buf.push(' ');
            }
            push_display_token(&mut buf, &arg.value);
        }
        buf
    }

    /// Like [`Self::to_quoted_string`], but masked arguments are rendered
    /// as `******`.
    pub fn to_redacted_string(&self) -> String {
        let mut buf = String::new();
        for arg in &self.args {
            if !buf.is_empty() {
                buf.push(' ');
            }
            if arg.secret {
                buf.push_str(REDACTED);
            } else {
                push_display_token(&mut buf, &arg.value);
            }
        }
        buf
    }

    /// Wraps this argument list into a `cmd.exe /C` invocation whose escaped
    /// command string reconstructs the original argument boundaries and
    /// propagates the wrapped command's exit code. See [`crate::windows`].
    pub fn to_windows_command(&self) -> ArgumentListBuilder {
        windows::to_windows_command(self)
    }
}

fn push_display_token(buf: &mut String, arg: &str) {
    if arg.contains(' ') || arg.is_empty() {
        buf.push('"');
        buf.push_str(arg);
        buf.push('"');
    } else {
        buf.push_str(arg);
    }
}
