//! Error types used to report failure in tag-grammar parsing
//!
//! This module defines the primary type [`GrammarError`] and the alias
//! [`GrammarResult<T>`]. All variants are detected purely from the shape
//! of the directive text; no semantic validation of modifier arity or
//! argument types is performed at this level.
//!
//! Errors on the nested-grammar path are strict and abort the parse that
//! produced them. The flat directive parser never surfaces them: a failed
//! nested parse is silently abandoned there and the directive is
//! reinterpreted as flat tokens.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Enumeration type over all errors that may be encountered while parsing
/// a bracketed tag directive into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Error case when a nested-tag parse is invoked on a blank or
    /// whitespace-only string.
    EmptyTag,
    /// Error case when an opening `<` has no corresponding `>` before the
    /// end of input. Carries the text being parsed when the mismatch was
    /// detected.
    UnmatchedBracket { text: String },
    /// Error case when a segment inside a modifier's argument list itself
    /// fails to parse. Carries the name of the enclosing modifier for
    /// diagnostic context; the inner failure is available through
    /// [`Error::source`] and [`root_cause`](GrammarError::root_cause).
    Child {
        modifier: String,
        source: Box<GrammarError>,
    },
    /// Error case when the bracket-nesting depth of a directive exceeds
    /// the configured bound.
    MaxDepthExceeded { limit: usize },
}

impl GrammarError {
    /// Follows the chain of [`Child`](GrammarError::Child) wrappers down
    /// to the innermost failure.
    #[must_use]
    pub fn root_cause(&self) -> &GrammarError {
        match self {
            GrammarError::Child { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            GrammarError::EmptyTag => write!(f, "empty tag"),
            GrammarError::UnmatchedBracket { text } => {
                write!(f, "unmatched '<' in tag: {}", text)
            }
            GrammarError::Child { modifier, source } => {
                write!(f, "failed to parse children of {}: {}", modifier, source)
            }
            GrammarError::MaxDepthExceeded { limit } => {
                write!(f, "tag nesting exceeds maximum depth of {}", limit)
            }
        }
    }
}

impl Error for GrammarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GrammarError::Child { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

/// Type alias for Result with an error type of [`GrammarError`]
///
/// Returned by the nested-tag parser and the helpers it is built from.
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
