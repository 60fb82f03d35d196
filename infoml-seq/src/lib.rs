//! Sequence transforms for the infoml crates.
//!
//! - **Burrows-Wheeler Transform** — [`bwt::Bwt`], with string helpers
//!   [`bwt::transform`] and [`bwt::inverse`]
//!
//! # Example
//!
//! ```
//! use infoml_seq::bwt;
//!
//! let encoded = bwt::transform("banana").unwrap();
//! assert_eq!(encoded, "annb$aa");
//! assert_eq!(bwt::inverse(&encoded).unwrap(), "banana");
//! ```

pub mod bwt;

pub use bwt::Bwt;
