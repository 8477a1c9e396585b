//! Custom error types for the transposition-cipher crate.

use thiserror::Error;

/// The primary error type for the fallible parts of this crate.
///
/// The cipher operations themselves are total and never produce one of
/// these; errors only come out of strict option parsing and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspositionError {
    /// A traversal mode string is not one of `row-lr`, `row-rl`, `col-tb`, `col-bt`.
    #[error("Unknown traversal mode: {0:?}. Expected one of row-lr, row-rl, col-tb, col-bt.")]
    UnknownMode(String),

    /// The CLI subcommand is neither `encrypt` nor `decrypt`.
    #[error("Unknown command: {0:?}. Expected encrypt or decrypt.")]
    UnknownCommand(String),

    /// A required positional argument or flag value is missing.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// A flag was given a value it cannot accept.
    #[error("Invalid value {value:?} for {flag}")]
    InvalidArgument { flag: &'static str, value: String },

    /// Any other malformed command line.
    #[error("{0}")]
    Usage(String),
}

/// A convenience `Result` type alias using the crate's `TranspositionError` type.
pub type Result<T> = std::result::Result<T, TranspositionError>;
