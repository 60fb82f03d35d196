//! Pairwise sequence alignment for the infoml crates.
//!
//! Provides Smith-Waterman (local) and Needleman-Wunsch (semiglobal and
//! global) alignment with linear gap penalties, scored by amino acid
//! (BLOSUM, PAM) or synthesized nucleotide substitution matrices.
//!
//! Every engine call is independent and allocates its own tables, so calls
//! can run concurrently on separate threads without coordination. Full
//! tables take `O(A * B)` memory; score-only calls keep two rows.
//!
//! # Quick start
//!
//! ```
//! use infoml_align::{swalign, LocalParams, SubstitutionMatrix};
//!
//! let params = LocalParams::new(SubstitutionMatrix::nucleotide(2, -1), -5);
//! let aln = swalign(b"AAACGTAAA", b"TTTCGTTTT", &params)
//!     .unwrap()
//!     .into_alignment()
//!     .unwrap();
//! assert_eq!(aln.score, 6);
//! assert_eq!(aln.align(), ["CGT", "CGT"]);
//! ```

pub mod batch;
pub mod matrix;
pub mod needleman_wunsch;
pub mod params;
pub mod scoring;
pub mod semi_global;
pub mod smith_waterman;
mod traceback;
pub mod types;

pub use batch::{align_batch, Aligner};
pub use matrix::{DpMatrix, LARGE_MATRIX_CELLS};
pub use needleman_wunsch::{global_score, nwalign};
pub use params::{GlobalParams, LocalParams};
pub use scoring::{Alphabet, SubstitutionMatrix};
pub use semi_global::semi_global;
pub use smith_waterman::swalign;
pub use types::{percent_identity, AlignOutput, Alignment, CigarOp, Direction, OutputMode};
