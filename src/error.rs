//! Error types for arglist.
//!
//! The only recoverable failure in this crate is malformed property text:
//! every other operation is pure, infallible string processing. Parsing
//! surfaces a `thiserror`-based [`PropertyParseError`] carrying the 1-based
//! line number of the offending input, and commits nothing on failure.

/// Property text could not be parsed.
///
/// Returned by [`crate::properties::parse`] and by
/// [`crate::ArgumentListBuilder::add_key_value_pairs_from_property_string`].
/// When this error is returned, no partial mapping has been produced and no
/// arguments have been appended.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid property syntax at line {line}: {message}")]
pub struct PropertyParseError {
    /// 1-based line number in the property text where parsing failed.
    pub line: usize,
    /// Human-readable description of the malformed construct.
    pub message: String,
}

impl PropertyParseError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}
