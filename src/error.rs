//! Error types.
//!
//! The engine itself is total over its input; the only failures are bad
//! configuration and malformed lexicon data, both reported at construction.

use thiserror::Error;

/// Errors raised while building a [`Substitutor`](crate::Substitutor) or a
/// [`Lexicon`](crate::Lexicon).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `chaos_probability` was NaN or outside `[0, 1]`.
    #[error("chaos probability must be within [0, 1], got {0}")]
    InvalidChaosProbability(f64),

    /// Lexicon text could not be parsed.
    #[error("lexicon line {line}: {message}")]
    Lexicon { line: usize, message: String },
}

impl Error {
    pub(crate) fn lexicon(line: usize, message: impl Into<String>) -> Self {
        Error::Lexicon { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
