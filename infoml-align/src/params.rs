//! Parameter sets for the alignment engines.
//!
//! Defaults reproduce the classic call signatures: local alignment scores
//! with BLOSUM62 and a gap of -5; global/semiglobal alignment scores
//! nucleotides with +1/-1 and a gap of -2.

use std::borrow::Cow;

use crate::scoring::{Alphabet, SubstitutionMatrix};
use crate::types::OutputMode;

/// Default linear gap penalty for local alignment.
pub const DEFAULT_LOCAL_GAP: i32 = -5;

/// Default linear gap penalty for global and semiglobal alignment.
pub const DEFAULT_GLOBAL_GAP: i32 = -2;

/// Parameters for Smith-Waterman local alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalParams {
    /// Score added per gap symbol (conventionally `<= 0`).
    pub gap: i32,
    /// Pair scores.
    pub submat: SubstitutionMatrix,
    pub output: OutputMode,
}

impl Default for LocalParams {
    fn default() -> Self {
        Self {
            gap: DEFAULT_LOCAL_GAP,
            submat: SubstitutionMatrix::blosum62(),
            output: OutputMode::Alignment,
        }
    }
}

impl LocalParams {
    /// Full-alignment parameters with the given matrix and gap penalty.
    pub fn new(submat: SubstitutionMatrix, gap: i32) -> Self {
        Self {
            gap,
            submat,
            output: OutputMode::Alignment,
        }
    }

    /// Set the linear gap penalty.
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the substitution matrix.
    pub fn with_submat(mut self, submat: SubstitutionMatrix) -> Self {
        self.submat = submat;
        self
    }

    /// Set what the engine returns.
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Shorthand for `with_output(OutputMode::Score)`.
    pub fn score_only(self) -> Self {
        self.with_output(OutputMode::Score)
    }

    /// Shorthand for `with_output(OutputMode::Identity)`.
    pub fn ident_only(self) -> Self {
        self.with_output(OutputMode::Identity)
    }
}

/// Parameters for Needleman-Wunsch (global) and semiglobal alignment.
///
/// When `submat` is `None` the matrix is derived from `alphabet`:
/// nucleotides use `match_score`/`mismatch`, amino acids use BLOSUM62.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalParams {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
    pub alphabet: Alphabet,
    pub submat: Option<SubstitutionMatrix>,
    pub output: OutputMode,
    /// `false` = semiglobal (free end gaps), `true` = true global.
    pub penalize_end_gaps: bool,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch: -1,
            gap: DEFAULT_GLOBAL_GAP,
            alphabet: Alphabet::Nucleotide,
            submat: None,
            output: OutputMode::Alignment,
            penalize_end_gaps: false,
        }
    }
}

impl GlobalParams {
    /// Default parameters: nucleotide, match 1, mismatch -1, gap -2, semiglobal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match/mismatch scores of the synthesized nucleotide matrix.
    pub fn with_scores(mut self, match_score: i32, mismatch: i32) -> Self {
        self.match_score = match_score;
        self.mismatch = mismatch;
        self
    }

    /// Set the linear gap penalty.
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    /// Pick the built-in matrix family used when no explicit matrix is set.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Use an explicit matrix, overriding the alphabet and scalar scores.
    pub fn with_submat(mut self, submat: SubstitutionMatrix) -> Self {
        self.submat = Some(submat);
        self
    }

    /// Set what the engine returns.
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Shorthand for `with_output(OutputMode::Score)`.
    pub fn score_only(self) -> Self {
        self.with_output(OutputMode::Score)
    }

    /// Shorthand for `with_output(OutputMode::Identity)`.
    pub fn ident_only(self) -> Self {
        self.with_output(OutputMode::Identity)
    }

    /// Switch between semiglobal (`false`) and true global (`true`).
    pub fn penalize_end_gaps(mut self, penalize: bool) -> Self {
        self.penalize_end_gaps = penalize;
        self
    }

    /// The matrix the engine will score with.
    pub fn resolve_submat(&self) -> Cow<'_, SubstitutionMatrix> {
        match (&self.submat, self.alphabet) {
            (Some(m), _) => Cow::Borrowed(m),
            (None, Alphabet::Nucleotide) => {
                Cow::Owned(SubstitutionMatrix::nucleotide(self.match_score, self.mismatch))
            }
            (None, Alphabet::AminoAcid) => Cow::Owned(SubstitutionMatrix::blosum62()),
        }
    }
}
