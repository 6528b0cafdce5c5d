//! Variable resolution for macro expansion.
//!
//! This module provides:
//! - [`VariableResolver`]: trait for looking up a variable name, implemented
//!   for maps and closures so callers and tests can supply either
//! - [`replace_macros`]: expands `$NAME` and `${NAME}` references in a
//!   template using a resolver, leaving unresolved references verbatim
//!
//! Property values injected through
//! [`crate::ArgumentListBuilder::add_key_value_pairs_from_property_string`]
//! pass through [`replace_macros`] before being appended as arguments.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `$NAME` or `${NAME}`. The braced form additionally allows `.`
/// and `-` so structured keys like `${build.number}` resolve as one name.
static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:([A-Za-z0-9_]+)|\{([A-Za-z0-9_.-]+)\})").expect("variable pattern is valid")
});

/// Resolves variable names to values during macro expansion.
///
/// A resolver is a pure lookup: `None` means the name is unknown, in which
/// case the reference is left untouched in the expanded output.
pub trait VariableResolver {
    /// Looks up `name`, returning its value if known.
    fn resolve(&self, name: &str) -> Option<String>;
}

impl VariableResolver for HashMap<String, String> {
    fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<F> VariableResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Expands `$NAME` and `${NAME}` references in `template`.
///
/// References the resolver does not know are emitted verbatim, so a template
/// without macros passes through unchanged for any resolver.
pub fn replace_macros(template: &str, resolver: &dyn VariableResolver) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in VARIABLE.captures_iter(template) {
        let whole = caps.get(0).expect("capture group 0 always present");
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .expect("one of the name groups always matches")
            .as_str();
        out.push_str(&template[last..whole.start()]);
        match resolver.resolve(name) {
            Some(value) => out.push_str(&value),
            None => out.push_str(whole.as_str()),
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);
    out
}
