//! Core trait definitions shared across the infoml crates.

/// A type that carries a numeric score (alignment score, quality, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}
