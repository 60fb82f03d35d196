//! Structured error types for the infoml crates.

use thiserror::Error;

/// Unified error type for all infoml operations.
#[derive(Debug, Error)]
pub enum InfomlError {
    /// A sequence symbol is not part of the active substitution matrix.
    #[error("unknown symbol {symbol:?} for substitution matrix {matrix}")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
        /// Name of the matrix the lookup was made against.
        matrix: String,
    },

    /// Invalid input (bad arguments, malformed tables, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested mode has no defined behavior yet.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl InfomlError {
    /// Build an [`InfomlError::UnknownSymbol`] from a raw byte.
    pub fn unknown_symbol(symbol: u8, matrix: &str) -> Self {
        InfomlError::UnknownSymbol {
            symbol: symbol as char,
            matrix: matrix.to_string(),
        }
    }
}

/// Convenience alias used throughout the infoml crates.
pub type Result<T> = std::result::Result<T, InfomlError>;
