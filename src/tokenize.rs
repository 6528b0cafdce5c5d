//! Whitespace tokenizer.
//!
//! Splits a blob of CLI flags into separate arguments. Runs of consecutive
//! whitespace collapse, and empty or all-whitespace input yields no tokens.
//! There is deliberately no quote-aware grouping: a double-quoted phrase with
//! an internal space splits into multiple tokens. Callers that need a value
//! kept whole should append it as a single argument instead.

/// Splits `s` on runs of whitespace into owned tokens.
pub fn tokenize(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
