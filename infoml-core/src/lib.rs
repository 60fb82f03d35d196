//! Shared primitives for the infoml alignment crates.
//!
//! - **Error types** — [`InfomlError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] for anything that carries a numeric score

pub mod error;
pub mod traits;

pub use error::{InfomlError, Result};
pub use traits::*;
