//! Error types used by the tokenizer.
//!
//! There is exactly one kind of malformed input the tokenizer can't get past on its own:
//! a `<` that no lexeme matches and that has no `>` anywhere after it. That is reported
//! as a [`StalledProgressError`]. Everything else the handlers return is propagated
//! untouched as [`TokenizerError::ContentHandlerError`].

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error returned by content handlers.
pub type HandlerError = Box<dyn StdError + Send + Sync>;

/// The result type returned by content handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// The tokenizer could not consume anything at the current position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Tokenizer made no progress at byte {position}, unable to consume {remainder:?}.")]
pub struct StalledProgressError {
    /// Byte offset of the unconsumed input in the original string.
    pub position: usize,
    /// The unconsumed suffix of the input.
    pub remainder: String,
}

/// A fatal error that aborted tokenization.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// The input contains a `<` that can't be tokenized and no error handler was set.
    #[error(transparent)]
    StalledProgress(#[from] StalledProgressError),

    /// A content handler returned an error.
    #[error("{0}")]
    ContentHandlerError(#[source] HandlerError),
}

impl TokenizerError {
    /// Returns the stalled progress details if this error was caused by malformed input.
    #[inline]
    pub fn as_stalled_progress(&self) -> Option<&StalledProgressError> {
        match self {
            TokenizerError::StalledProgress(err) => Some(err),
            TokenizerError::ContentHandlerError(_) => None,
        }
    }
}
