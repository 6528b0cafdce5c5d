//! Builder for process argument lists.
//!
//! The central type is [`ArgumentListBuilder`]: an ordered sequence of
//! arguments destined for a process invocation, where individual positions
//! can be marked as secret so that callers redact them before writing a
//! command line to any log sink. Around it sit a handful of leaf modules:
//!
//! - [`properties`]: parses flat `key=value` property text into an ordered
//!   mapping, used to inject externally supplied configuration as arguments.
//! - [`resolve`]: the [`VariableResolver`] collaborator and `$VAR`/`${VAR}`
//!   macro expansion applied to property values during injection.
//! - [`tokenize`]: whitespace tokenizer for decomposing a blob of CLI flags
//!   into separate arguments.
//! - [`windows`]: wraps a finished argument list into a single escaped
//!   `cmd.exe /C` command so the interpreter reconstructs the original
//!   argument boundaries and exits with the wrapped command's exit code.

pub mod builder;
pub mod error;
pub mod properties;
pub mod resolve;
pub mod tokenize;
pub mod windows;

pub use builder::ArgumentListBuilder;
pub use error::PropertyParseError;
pub use resolve::{VariableResolver, replace_macros};
