//! Substitution models for pairwise sequence alignment.
//!
//! A [`SubstitutionMatrix`] maps an ordered pair of symbols to a score over an
//! explicit alphabet. The amino acid tables (BLOSUM, PAM) are the NCBI
//! references; nucleotide tables are synthesized from `match`/`mismatch`
//! scalars. Looking up a symbol outside the alphabet is always an error.

use core::fmt;
use core::str::FromStr;

use infoml_core::{InfomlError, Result};

/// Residue order of the built-in amino acid tables.
pub const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

/// Base order of the synthesized nucleotide table.
pub const NUCLEOTIDES: &[u8] = b"ACTG";

/// Gap marker used in aligned strings; never a valid matrix symbol.
pub const GAP: u8 = b'-';

/// Matrix dimension: 24 amino acid symbols.
const AA_DIM: usize = 24;

/// Marks a byte with no row in the lookup table.
const NO_SYMBOL: u8 = u8::MAX;

// ---------------------------------------------------------------------------
// Alphabet selector
// ---------------------------------------------------------------------------

/// Which built-in matrix family to use when no explicit matrix is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alphabet {
    /// Nucleotides (`A`, `C`, `T`, `G`), scored by match/mismatch.
    #[default]
    Nucleotide,
    /// Amino acids, scored by BLOSUM62.
    AminoAcid,
}

impl FromStr for Alphabet {
    type Err = InfomlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nt" | "dna" | "nucleotide" => Ok(Alphabet::Nucleotide),
            "aa" | "protein" | "amino" => Ok(Alphabet::AminoAcid),
            other => Err(InfomlError::InvalidInput(format!(
                "unknown alphabet '{other}', expected 'nt' or 'aa'"
            ))),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Nucleotide => f.write_str("nt"),
            Alphabet::AminoAcid => f.write_str("aa"),
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution matrix
// ---------------------------------------------------------------------------

/// A square symbol-pair scoring table over an explicit alphabet.
///
/// Lookups are case-insensitive for ASCII letters. Scores are stored
/// row-major in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MatrixRepr", into = "MatrixRepr")
)]
pub struct SubstitutionMatrix {
    name: String,
    alphabet: Vec<u8>,
    /// Byte value -> row index, `NO_SYMBOL` when absent. Always 256 entries.
    lookup: Vec<u8>,
    scores: Vec<i32>,
}

impl SubstitutionMatrix {
    /// Build a matrix from a caller-provided table.
    ///
    /// `scores` is row-major with `alphabet.len()` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty or has more than 254
    /// symbols, contains duplicate (case-insensitive), non-printable, or gap
    /// symbols, or if `scores` is not `n * n` long.
    pub fn from_table(name: impl Into<String>, alphabet: &[u8], scores: Vec<i32>) -> Result<Self> {
        let n = alphabet.len();
        if n == 0 {
            return Err(InfomlError::InvalidInput(
                "substitution matrix alphabet must not be empty".into(),
            ));
        }
        if n >= NO_SYMBOL as usize {
            return Err(InfomlError::InvalidInput(format!(
                "substitution matrix alphabet has {n} symbols, at most 254 allowed"
            )));
        }
        if scores.len() != n * n {
            return Err(InfomlError::InvalidInput(format!(
                "expected {} scores for a {n}x{n} matrix, got {}",
                n * n,
                scores.len()
            )));
        }
        for (k, &sym) in alphabet.iter().enumerate() {
            if !sym.is_ascii_graphic() || sym == GAP {
                return Err(InfomlError::InvalidInput(format!(
                    "invalid matrix symbol {:?}",
                    sym as char
                )));
            }
            if alphabet[..k].iter().any(|s| s.eq_ignore_ascii_case(&sym)) {
                return Err(InfomlError::InvalidInput(format!(
                    "duplicate matrix symbol {:?}",
                    sym as char
                )));
            }
        }
        Ok(Self::build(name.into(), alphabet, scores))
    }

    /// Synthesize a match/mismatch matrix over an arbitrary alphabet.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SubstitutionMatrix::from_table`].
    pub fn uniform(
        name: impl Into<String>,
        alphabet: &[u8],
        match_score: i32,
        mismatch_score: i32,
    ) -> Result<Self> {
        Self::from_table(name, alphabet, diagonal_table(alphabet.len(), match_score, mismatch_score))
    }

    /// Nucleotide matrix over `A C T G`: `match_score` on the diagonal,
    /// `mismatch_score` elsewhere.
    pub fn nucleotide(match_score: i32, mismatch_score: i32) -> Self {
        Self::build(
            format!("NT({match_score},{mismatch_score})"),
            NUCLEOTIDES,
            diagonal_table(NUCLEOTIDES.len(), match_score, mismatch_score),
        )
    }

    /// Look up a built-in table by name (`BLOSUM62`, `BLOSUM45`, `BLOSUM80`,
    /// `PAM250`). Case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names.
    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BLOSUM62" => Ok(Self::blosum62()),
            "BLOSUM45" => Ok(Self::blosum45()),
            "BLOSUM80" => Ok(Self::blosum80()),
            "PAM250" => Ok(Self::pam250()),
            _ => Err(InfomlError::InvalidInput(format!(
                "unknown substitution matrix '{name}'"
            ))),
        }
    }

    /// BLOSUM62, the default amino acid matrix.
    pub fn blosum62() -> Self {
        Self::build("BLOSUM62".into(), AMINO_ACIDS, BLOSUM62.to_vec())
    }

    /// BLOSUM45, for more divergent proteins.
    pub fn blosum45() -> Self {
        Self::build("BLOSUM45".into(), AMINO_ACIDS, BLOSUM45.to_vec())
    }

    /// BLOSUM80, for closely related proteins.
    pub fn blosum80() -> Self {
        Self::build("BLOSUM80".into(), AMINO_ACIDS, BLOSUM80.to_vec())
    }

    /// PAM250.
    pub fn pam250() -> Self {
        Self::build("PAM250".into(), AMINO_ACIDS, PAM250.to_vec())
    }

    fn build(name: String, alphabet: &[u8], scores: Vec<i32>) -> Self {
        debug_assert_eq!(scores.len(), alphabet.len() * alphabet.len());
        let mut lookup = vec![NO_SYMBOL; 256];
        for (k, &sym) in alphabet.iter().enumerate() {
            lookup[sym.to_ascii_uppercase() as usize] = k as u8;
            lookup[sym.to_ascii_lowercase() as usize] = k as u8;
        }
        Self {
            name,
            alphabet: alphabet.to_vec(),
            lookup,
            scores,
        }
    }

    /// Matrix name (e.g. "BLOSUM62").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbols in row/column order.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Number of symbols (rows and columns).
    pub fn dim(&self) -> usize {
        self.alphabet.len()
    }

    /// Whether `symbol` has a row in this matrix.
    pub fn contains(&self, symbol: u8) -> bool {
        self.lookup[symbol as usize] != NO_SYMBOL
    }

    /// Row index of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`InfomlError::UnknownSymbol`] if the symbol is not in the alphabet.
    pub fn index_of(&self, symbol: u8) -> Result<usize> {
        match self.lookup[symbol as usize] {
            NO_SYMBOL => Err(InfomlError::unknown_symbol(symbol, &self.name)),
            k => Ok(k as usize),
        }
    }

    /// Score the ordered pair `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`InfomlError::UnknownSymbol`] if either symbol is not in the alphabet.
    pub fn score(&self, x: u8, y: u8) -> Result<i32> {
        let i = self.index_of(x)?;
        let j = self.index_of(y)?;
        Ok(self.scores[i * self.dim() + j])
    }

    /// Check that every symbol of `seq` is scorable.
    ///
    /// # Errors
    ///
    /// Returns [`InfomlError::UnknownSymbol`] for the first foreign symbol.
    pub fn validate(&self, seq: &[u8]) -> Result<()> {
        seq.iter().try_for_each(|&s| self.index_of(s).map(|_| ()))
    }

    /// Whether `score(x, y) == score(y, x)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| (0..i).all(|j| self.scores[i * n + j] == self.scores[j * n + i]))
    }

    /// Largest absolute score in the table.
    pub fn max_abs_score(&self) -> u32 {
        self.scores.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0)
    }

    /// Check that no DP cell for an `a_len x b_len` problem can leave `i32`.
    ///
    /// Every cell is a sum of at most `a_len + b_len` steps, each bounded by
    /// the largest absolute substitution or gap score; a candidate adds one
    /// more step.
    ///
    /// # Errors
    ///
    /// Returns [`InfomlError::InvalidInput`] if that bound exceeds `i32::MAX`.
    pub fn check_score_range(&self, a_len: usize, b_len: usize, gap: i32) -> Result<()> {
        let step = u64::from(self.max_abs_score().max(gap.unsigned_abs()));
        let steps = (a_len as u64).saturating_add(b_len as u64).saturating_add(1);
        if steps.saturating_mul(step) > i32::MAX as u64 {
            return Err(InfomlError::InvalidInput(format!(
                "scores for a {a_len}x{b_len} alignment with {} and gap {gap} may overflow i32",
                self.name
            )));
        }
        Ok(())
    }

    /// Translate a sequence into row indices, failing on the first foreign symbol.
    pub(crate) fn encode(&self, seq: &[u8]) -> Result<Vec<usize>> {
        seq.iter().map(|&s| self.index_of(s)).collect()
    }

    /// Scores of row `i`, indexed by column symbol index.
    pub(crate) fn row(&self, i: usize) -> &[i32] {
        let n = self.dim();
        &self.scores[i * n..(i + 1) * n]
    }
}

/// Serialized form of a [`SubstitutionMatrix`]; the lookup table is rebuilt
/// and the whole table re-validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr {
    name: String,
    alphabet: Vec<u8>,
    scores: Vec<i32>,
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixRepr> for SubstitutionMatrix {
    type Error = InfomlError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Self::from_table(repr.name, &repr.alphabet, repr.scores)
    }
}

#[cfg(feature = "serde")]
impl From<SubstitutionMatrix> for MatrixRepr {
    fn from(m: SubstitutionMatrix) -> Self {
        MatrixRepr {
            name: m.name,
            alphabet: m.alphabet,
            scores: m.scores,
        }
    }
}

impl Default for SubstitutionMatrix {
    fn default() -> Self {
        Self::blosum62()
    }
}

fn diagonal_table(n: usize, match_score: i32, mismatch_score: i32) -> Vec<i32> {
    (0..n * n)
        .map(|k| if k / n == k % n { match_score } else { mismatch_score })
        .collect()
}

// ===========================================================================
// NCBI substitution matrix data
// Row/column order: A R N D C Q E G H I L K M F P S T W Y V B Z X *
// ===========================================================================

/// BLOSUM62 — 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM62: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
    -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
    -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// BLOSUM45 — 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM45: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     5, -2, -1, -2, -1, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -2, -2,  0, -1, -1,  0, -5, // A
    -2,  7,  0, -1, -3,  1,  0, -2,  0, -3, -2,  3, -1, -2, -2, -1, -1, -2, -1, -2, -1,  0, -1, -5, // R
    -1,  0,  6,  2, -2,  0,  0,  0,  1, -2, -3,  0, -2, -2, -2,  1,  0, -4, -2, -3,  4,  0, -1, -5, // N
    -2, -1,  2,  7, -3,  0,  2, -1,  0, -4, -3,  0, -3, -4, -1,  0, -1, -4, -2, -3,  5,  1, -1, -5, // D
    -1, -3, -2, -3, 12, -3, -3, -3, -3, -3, -2, -3, -2, -2, -4, -1, -1, -5, -3, -1, -2, -3, -2, -5, // C
    -1,  1,  0,  0, -3,  6,  2, -2,  1, -2, -2,  1,  0, -4, -1,  0, -1, -2, -1, -3,  0,  4, -1, -5, // Q
    -1,  0,  0,  2, -3,  2,  6, -2,  0, -3, -2,  1, -2, -3,  0,  0, -1, -3, -2, -3,  1,  4, -1, -5, // E
     0, -2,  0, -1, -3, -2, -2,  7, -2, -4, -3, -2, -2, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -5, // G
    -2,  0,  1,  0, -3,  1,  0, -2, 10, -3, -2, -1,  0, -2, -2, -1, -2, -3,  2, -3,  0,  0, -1, -5, // H
    -1, -3, -2, -4, -3, -2, -3, -4, -3,  5,  2, -3,  2,  0, -2, -2, -1, -2,  0,  3, -3, -3, -1, -5, // I
    -1, -2, -3, -3, -2, -2, -2, -3, -2,  2,  5, -3,  2,  1, -3, -3, -1, -2,  0,  1, -3, -2, -1, -5, // L
    -1,  3,  0,  0, -3,  1,  1, -2, -1, -3, -3,  5, -1, -3, -1, -1, -1, -2, -1, -2,  0,  1, -1, -5, // K
    -1, -1, -2, -3, -2,  0, -2, -2,  0,  2,  2, -1,  6,  0, -2, -2, -1, -2,  0,  1, -2, -1, -1, -5, // M
    -2, -2, -2, -4, -2, -4, -3, -3, -2,  0,  1, -3,  0,  8, -3, -2, -1,  1,  3,  0, -3, -3, -1, -5, // F
    -1, -2, -2, -1, -4, -1,  0, -2, -2, -2, -3, -1, -2, -3,  9, -1, -1, -3, -3, -3, -2, -1, -1, -5, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -3, -1, -2, -2, -1,  4,  2, -4, -2, -1,  0,  0,  0, -5, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -1, -1,  2,  5, -3, -1,  0,  0, -1,  0, -5, // T
    -2, -2, -4, -4, -5, -2, -3, -2, -3, -2, -2, -2, -2,  1, -3, -4, -3, 15,  3, -3, -4, -2, -2, -5, // W
    -2, -1, -2, -2, -3, -1, -2, -3,  2,  0,  0, -1,  0,  3, -3, -2, -1,  3,  8, -1, -2, -2, -1, -5, // Y
     0, -2, -3, -3, -1, -3, -3, -3, -3,  3,  1, -2,  1,  0, -3, -1,  0, -3, -1,  5, -3, -3, -1, -5, // V
    -1, -1,  4,  5, -2,  0,  1, -1,  0, -3, -3,  0, -2, -3, -2,  0,  0, -4, -2, -3,  4,  2, -1, -5, // B
    -1,  0,  0,  1, -3,  4,  4, -2,  0, -3, -2,  1, -1, -3, -1,  0, -1, -2, -2, -3,  2,  4, -1, -5, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,  0,  0, -2, -1, -1, -1, -1, -1, -5, // X
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,  1, // *
];

/// BLOSUM80 — 24x24 flattened, NCBI reference.
#[rustfmt::skip]
const BLOSUM80: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     7, -3, -3, -3, -1, -2, -2,  0, -3, -3, -3, -1, -2, -4, -1,  2,  0, -5, -4, -1, -3, -2, -1, -8, // A
    -3,  9, -1, -3, -6,  1, -1, -4,  0, -5, -4,  3, -3, -5, -3, -2, -2, -5, -4, -4, -2,  0, -2, -8, // R
    -3, -1,  9,  2, -5,  0, -1, -1,  1, -6, -6,  0, -4, -6, -4,  1,  0, -7, -4, -5,  5,  0, -2, -8, // N
    -3, -3,  2, 10, -7, -1,  2, -3, -2, -7, -7, -2, -6, -6, -3, -1, -2, -8, -6, -6,  6,  1, -3, -8, // D
    -1, -6, -5, -7, 13, -5, -7, -6, -7, -2, -3, -6, -3, -4, -6, -2, -2, -5, -5, -2, -6, -7, -4, -8, // C
    -2,  1,  0, -1, -5,  9,  3, -4,  1, -5, -4,  2, -1, -5, -3, -1, -1, -4, -3, -4, -1,  5, -2, -8, // Q
    -2, -1, -1,  2, -7,  3,  8, -4,  0, -6, -6,  1, -4, -6, -2,  0, -2, -6, -5, -4,  1,  6, -2, -8, // E
     0, -4, -1, -3, -6, -4, -4,  9, -4, -7, -7, -3, -5, -6, -5, -1, -3, -6, -6, -6, -2, -4, -3, -8, // G
    -3,  0,  1, -2, -7,  1,  0, -4, 12, -6, -5, -1, -4, -2, -4, -2, -3, -4,  3, -5, -1,  0, -2, -8, // H
    -3, -5, -6, -7, -2, -5, -6, -7, -6,  7,  2, -5,  2, -1, -5, -4, -2, -5, -3,  4, -6, -6, -2, -8, // I
    -3, -4, -6, -7, -3, -4, -6, -7, -5,  2,  6, -4,  3,  0, -5, -4, -3, -4, -2,  1, -7, -5, -2, -8, // L
    -1,  3,  0, -2, -6,  2,  1, -3, -1, -5, -4,  8, -3, -5, -2, -1, -1, -6, -4, -4, -1,  1, -2, -8, // K
    -2, -3, -4, -6, -3, -1, -4, -5, -4,  2,  3, -3,  9, -1, -4, -3, -1, -3, -3,  1, -5, -3, -2, -8, // M
    -4, -5, -6, -6, -4, -5, -6, -6, -2, -1,  0, -5, -1, 10, -6, -4, -4,  0,  4, -2, -6, -6, -3, -8, // F
    -1, -3, -4, -3, -6, -3, -2, -5, -4, -5, -5, -2, -4, -6, 12, -2, -3, -7, -6, -4, -4, -2, -3, -8, // P
     2, -2,  1, -1, -2, -1,  0, -1, -2, -4, -4, -1, -3, -4, -2,  7,  2, -6, -3, -3,  0, -1, -1, -8, // S
     0, -2,  0, -2, -2, -1, -2, -3, -3, -2, -3, -1, -1, -4, -3,  2,  8, -5, -3,  0, -1, -2, -1, -8, // T
    -5, -5, -7, -8, -5, -4, -6, -6, -4, -5, -4, -6, -3,  0, -7, -6, -5, 16,  3, -5, -8, -5, -5, -8, // W
    -4, -4, -4, -6, -5, -3, -5, -6,  3, -3, -2, -4, -3,  4, -6, -3, -3,  3, 11, -3, -5, -4, -3, -8, // Y
    -1, -4, -5, -6, -2, -4, -4, -6, -5,  4,  1, -4,  1, -2, -4, -3,  0, -5, -3,  7, -6, -4, -2, -8, // V
    -3, -2,  5,  6, -6, -1,  1, -2, -1, -6, -7, -1, -5, -6, -4,  0, -1, -8, -5, -6,  6,  0, -3, -8, // B
    -2,  0,  0,  1, -7,  5,  6, -4,  0, -6, -5,  1, -3, -6, -2, -1, -2, -5, -4, -4,  0,  6, -1, -8, // Z
    -1, -2, -2, -3, -4, -2, -2, -3, -2, -2, -2, -2, -2, -3, -3, -1, -1, -5, -3, -2, -3, -1, -2, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

/// PAM250 — 24x24 flattened, NCBI/Dayhoff reference.
#[rustfmt::skip]
const PAM250: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     2, -2,  0,  0, -2,  0,  0,  1, -1, -1, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -8, // A
    -2,  6,  0, -1, -4,  1, -1, -3,  2, -2, -3,  3,  0, -4,  0,  0, -1,  2, -4, -2, -1,  0, -1, -8, // R
     0,  0,  2,  2, -4,  1,  1,  0,  2, -2, -3,  1, -2, -3,  0,  1,  0, -4, -2, -2,  2,  1,  0, -8, // N
     0, -1,  2,  4, -5,  2,  3,  1,  1, -2, -4,  0, -3, -6, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // D
    -2, -4, -4, -5, 12, -5, -5, -3, -3, -2, -6, -5, -5, -4, -3,  0, -2, -8,  0, -2, -4, -5, -3, -8, // C
     0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -5,  0, -1, -1, -5, -4, -2,  1,  3, -1, -8, // Q
     0, -1,  1,  3, -5,  2,  4,  0,  1, -2, -3,  0, -2, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // E
     1, -3,  0,  1, -3, -1,  0,  5, -2, -3, -4, -2, -3, -5,  0,  1,  0, -7, -5, -1,  0,  0, -1, -8, // G
    -1,  2,  2,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -2,  0, -1, -1, -3,  0, -2,  1,  2, -1, -8, // H
    -1, -2, -2, -2, -2, -2, -2, -3, -2,  5,  2, -2,  2,  1, -2, -1,  0, -5, -1,  4, -2, -2, -1, -8, // I
    -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -3, -3, -2, -2, -1,  2, -3, -3, -1, -8, // L
    -1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5,  0, -5, -1,  0,  0, -3, -4, -2,  1,  0, -1, -8, // K
    -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  0,  6,  0, -2, -2, -1, -4, -2,  2, -2, -2, -1, -8, // M
    -3, -4, -3, -6, -4, -5, -5, -5, -2,  1,  2, -5,  0,  9, -5, -3, -3,  0,  7, -1, -4, -5, -2, -8, // F
     1,  0,  0, -1, -3,  0, -1,  0,  0, -2, -3, -1, -2, -5,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
     1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0,  0,  0, -8, // S
     1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -8, // T
    -6,  2, -4, -7, -8, -5, -7, -7, -3, -5, -2, -3, -4,  0, -6, -2, -5, 17,  0, -6, -5, -6, -4, -8, // W
    -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -5, -3, -3,  0, 10, -2, -3, -4, -2, -8, // Y
     0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2, -1, -8, // V
     0, -1,  2,  3, -4,  1,  3,  0,  1, -2, -3,  1, -2, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -8, // B
     0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -6, -4, -2,  2,  3, -1, -8, // Z
     0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blosum62_diagonal_spot_checks() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(b'A', b'A').unwrap(), 4);
        assert_eq!(m.score(b'W', b'W').unwrap(), 11);
        assert_eq!(m.score(b'C', b'C').unwrap(), 9);
        assert_eq!(m.score(b'*', b'*').unwrap(), 1);
    }

    #[test]
    fn blosum62_off_diagonal() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(b'A', b'R').unwrap(), -1);
        assert_eq!(m.score(b'W', b'F').unwrap(), 1);
        assert_eq!(m.score(b'D', b'L').unwrap(), -4);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(b'w', b'W').unwrap(), 11);
        let nt = SubstitutionMatrix::nucleotide(1, -1);
        assert_eq!(nt.score(b'a', b'A').unwrap(), 1);
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let m = SubstitutionMatrix::blosum62();
        let err = m.score(b'J', b'A').unwrap_err();
        assert!(matches!(err, InfomlError::UnknownSymbol { symbol: 'J', .. }));

        let nt = SubstitutionMatrix::nucleotide(1, -1);
        assert!(nt.score(b'A', b'U').is_err());
        assert!(nt.score(b'N', b'N').is_err());
        assert!(nt.validate(b"ACGTN").is_err());
        assert!(nt.validate(b"acgt").is_ok());
    }

    #[test]
    fn nucleotide_matrix_layout() {
        let m = SubstitutionMatrix::nucleotide(2, -3);
        assert_eq!(m.alphabet(), b"ACTG");
        for &x in NUCLEOTIDES {
            for &y in NUCLEOTIDES {
                let expected = if x == y { 2 } else { -3 };
                assert_eq!(m.score(x, y).unwrap(), expected);
            }
        }
        assert!(m.is_symmetric());
    }

    #[test]
    fn builtins_are_symmetric() {
        for m in [
            SubstitutionMatrix::blosum62(),
            SubstitutionMatrix::blosum45(),
            SubstitutionMatrix::blosum80(),
            SubstitutionMatrix::pam250(),
        ] {
            assert!(m.is_symmetric(), "{} should be symmetric", m.name());
            assert_eq!(m.dim(), AA_DIM);
        }
    }

    #[test]
    fn by_name_resolves_builtins() {
        assert_eq!(SubstitutionMatrix::by_name("blosum62").unwrap().name(), "BLOSUM62");
        assert_eq!(SubstitutionMatrix::by_name("PAM250").unwrap().name(), "PAM250");
        assert!(SubstitutionMatrix::by_name("PAM9000").is_err());
    }

    #[test]
    fn from_table_validation() {
        assert!(SubstitutionMatrix::from_table("empty", b"", vec![]).is_err());
        assert!(SubstitutionMatrix::from_table("short", b"AB", vec![1, 2, 3]).is_err());
        assert!(SubstitutionMatrix::from_table("dup", b"Aa", vec![1; 4]).is_err());
        assert!(SubstitutionMatrix::from_table("gap", b"A-", vec![1; 4]).is_err());
        assert!(SubstitutionMatrix::from_table("space", b"A ", vec![1; 4]).is_err());

        let m = SubstitutionMatrix::from_table("asym", b"XY", vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.score(b'X', b'Y').unwrap(), 2);
        assert_eq!(m.score(b'Y', b'X').unwrap(), 3);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn uniform_over_custom_alphabet() {
        let m = SubstitutionMatrix::uniform("ACGTU", b"ACGTU", 1, -1).unwrap();
        assert_eq!(m.score(b'U', b'U').unwrap(), 1);
        assert_eq!(m.score(b'U', b'T').unwrap(), -1);
    }

    #[test]
    fn encode_maps_to_rows() {
        let m = SubstitutionMatrix::nucleotide(1, -1);
        assert_eq!(m.encode(b"ACTGa").unwrap(), vec![0, 1, 2, 3, 0]);
        assert_eq!(m.row(1), &[-1, 1, -1, -1]);
    }

    #[test]
    fn alphabet_from_str() {
        assert_eq!("nt".parse::<Alphabet>().unwrap(), Alphabet::Nucleotide);
        assert_eq!("AA".parse::<Alphabet>().unwrap(), Alphabet::AminoAcid);
        assert!("rna".parse::<Alphabet>().is_err());
        assert_eq!(Alphabet::AminoAcid.to_string(), "aa");
    }

    #[test]
    fn score_range_bound() {
        let m = SubstitutionMatrix::nucleotide(i32::MAX / 3, -1);
        assert_eq!(m.max_abs_score(), (i32::MAX / 3) as u32);
        assert!(m.check_score_range(1, 1, -1).is_ok());
        assert!(matches!(
            m.check_score_range(2, 1, -1),
            Err(InfomlError::InvalidInput(_))
        ));

        let small = SubstitutionMatrix::nucleotide(1, -1);
        assert!(small.check_score_range(10_000, 10_000, -5).is_ok());
        assert!(small.check_score_range(0, 0, i32::MIN).is_err());
        assert!(small.check_score_range(usize::MAX, usize::MAX, -1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_keeps_lookup() {
        let m = SubstitutionMatrix::blosum62();
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("lookup"));
        let back: SubstitutionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.score(b'w', b'W').unwrap(), 11);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_matrix_fails_to_deserialize() {
        for json in [
            r#"{"name":"bad","alphabet":[65],"scores":[]}"#,
            r#"{"name":"bad","alphabet":[],"scores":[]}"#,
            r#"{"name":"bad","alphabet":[65,97],"scores":[1,0,0,1]}"#,
            r#"{"name":"bad","alphabet":[65],"lookup":[0],"scores":[]}"#,
        ] {
            assert!(serde_json::from_str::<SubstitutionMatrix>(json).is_err(), "{json}");
        }
        let ok: SubstitutionMatrix =
            serde_json::from_str(r#"{"name":"AC","alphabet":[65,67],"scores":[1,-1,-1,1]}"#).unwrap();
        assert_eq!(ok.score(b'c', b'C').unwrap(), 1);
    }

    #[test]
    fn default_is_blosum62() {
        assert_eq!(SubstitutionMatrix::default().name(), "BLOSUM62");
    }
}
