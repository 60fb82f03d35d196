//! Core types for alignment results and traceback bookkeeping.

use core::fmt;

use crate::scoring::GAP;

/// Which recurrence branch produced a DP cell.
///
/// The discriminants are the traceback codes: `0` stops the walk, `1`
/// consumes a symbol from both sequences, `2` consumes from the second
/// sequence only (gap in the first), `3` from the first only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Local-alignment reset or DP origin.
    #[default]
    Stop = 0,
    /// Substitution or match: `(i-1, j-1) -> (i, j)`.
    Diagonal = 1,
    /// Gap in the first sequence: `(i, j-1) -> (i, j)`.
    Horizontal = 2,
    /// Gap in the second sequence: `(i-1, j) -> (i, j)`.
    Vertical = 3,
}

impl Direction {
    /// Numeric traceback code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Pick the best `(direction, score)` candidate.
    ///
    /// Candidates are in priority order; the first one that attains the
    /// maximum wins, so later candidates only take over on a strictly
    /// greater score.
    pub fn select<const N: usize>(candidates: [(Direction, i32); N]) -> (Direction, i32) {
        let mut best = candidates[0];
        for candidate in candidates.into_iter().skip(1) {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best
    }
}

/// What an engine call should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputMode {
    /// Optimal score only; no traceback table is allocated.
    Score,
    /// Percent identity of the optimal path only.
    Identity,
    /// Score, aligned strings, and identity.
    #[default]
    Alignment,
}

/// A run-length alignment operation, named from the first sequence's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CigarOp {
    /// Identical symbols. SAM op `=`.
    Match(usize),
    /// Differing symbols. SAM op `X`.
    Mismatch(usize),
    /// Gap in the first sequence. SAM op `I`.
    Insertion(usize),
    /// Gap in the second sequence. SAM op `D`.
    Deletion(usize),
}

impl CigarOp {
    /// Single-character SAM CIGAR code.
    pub fn code(&self) -> char {
        match self {
            CigarOp::Match(_) => '=',
            CigarOp::Mismatch(_) => 'X',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
        }
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Match(n) | CigarOp::Mismatch(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => *n,
        }
    }

    /// Whether the run covers no columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn same_kind(&self, other: &CigarOp) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    fn grow(&mut self) {
        match self {
            CigarOp::Match(n) | CigarOp::Mismatch(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => *n += 1,
        }
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// A full pairwise alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Optimal alignment score.
    pub score: i32,
    /// First sequence with `-` for gaps.
    pub aligned_a: String,
    /// Second sequence with `-` for gaps. Same length as `aligned_a`.
    pub aligned_b: String,
    /// Percent identity in `[0, 100]`.
    pub ident: f64,
    /// Start of the aligned region in the first sequence (0-based, inclusive).
    pub a_start: usize,
    /// End of the aligned region in the first sequence (exclusive).
    pub a_end: usize,
    /// Start of the aligned region in the second sequence (0-based, inclusive).
    pub b_start: usize,
    /// End of the aligned region in the second sequence (exclusive).
    pub b_end: usize,
}

impl Alignment {
    /// The aligned pair as `[a, b]`.
    pub fn align(&self) -> [&str; 2] {
        [&self.aligned_a, &self.aligned_b]
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Columns where both symbols are equal (gaps never match).
    pub fn matches(&self) -> usize {
        count_matches(self.aligned_a.as_bytes(), self.aligned_b.as_bytes())
    }

    /// Columns holding a gap on either side.
    pub fn gaps(&self) -> usize {
        self.columns().filter(|&(x, y)| x == GAP || y == GAP).count()
    }

    /// Run-length operations describing the alignment columns.
    pub fn cigar(&self) -> Vec<CigarOp> {
        let mut ops: Vec<CigarOp> = Vec::new();
        for (x, y) in self.columns() {
            let op = if x == GAP {
                CigarOp::Insertion(1)
            } else if y == GAP {
                CigarOp::Deletion(1)
            } else if x.eq_ignore_ascii_case(&y) {
                CigarOp::Match(1)
            } else {
                CigarOp::Mismatch(1)
            };
            match ops.last_mut() {
                Some(last) if last.same_kind(&op) => last.grow(),
                _ => ops.push(op),
            }
        }
        ops
    }

    /// Format the CIGAR vector as a compact string, e.g. `"4=1I3="`.
    pub fn cigar_string(&self) -> String {
        self.cigar().iter().map(ToString::to_string).collect()
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_a
            .bytes()
            .zip(self.aligned_b.bytes())
    }
}

impl infoml_core::Scored for Alignment {
    fn score(&self) -> f64 {
        self.score as f64
    }
}

/// The result of an engine call; the variant follows the requested [`OutputMode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignOutput {
    /// Optimal score only.
    Score(i32),
    /// Percent identity of the optimal path.
    Identity(f64),
    /// Full alignment with score and identity.
    Alignment(Alignment),
}

impl AlignOutput {
    /// The optimal score, if this output carries one.
    pub fn score(&self) -> Option<i32> {
        match self {
            AlignOutput::Score(s) => Some(*s),
            AlignOutput::Alignment(a) => Some(a.score),
            AlignOutput::Identity(_) => None,
        }
    }

    /// Percent identity, if this output carries one.
    pub fn identity(&self) -> Option<f64> {
        match self {
            AlignOutput::Identity(id) => Some(*id),
            AlignOutput::Alignment(a) => Some(a.ident),
            AlignOutput::Score(_) => None,
        }
    }

    /// The full alignment, if one was requested.
    pub fn alignment(&self) -> Option<&Alignment> {
        match self {
            AlignOutput::Alignment(a) => Some(a),
            _ => None,
        }
    }

    /// Consume the output, keeping only a full alignment.
    pub fn into_alignment(self) -> Option<Alignment> {
        match self {
            AlignOutput::Alignment(a) => Some(a),
            _ => None,
        }
    }
}

/// `matches / length * 100`, or 0 for an empty path.
pub(crate) fn percent(matches: u32, length: u32) -> f64 {
    if length == 0 {
        return 0.0;
    }
    matches as f64 / length as f64 * 100.0
}

/// Percent identity of two equal-length aligned strings.
///
/// Gap columns never count as matches. Returns 0 for empty input.
pub fn percent_identity(aligned_a: &str, aligned_b: &str) -> f64 {
    let matches = count_matches(aligned_a.as_bytes(), aligned_b.as_bytes());
    percent(matches as u32, aligned_a.len() as u32)
}

fn count_matches(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .zip(b)
        .filter(|(x, y)| **x != GAP && x.eq_ignore_ascii_case(y))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(a: &str, b: &str) -> Alignment {
        Alignment {
            score: 0,
            aligned_a: a.into(),
            aligned_b: b.into(),
            ident: percent_identity(a, b),
            a_start: 0,
            a_end: 0,
            b_start: 0,
            b_end: 0,
        }
    }

    #[test]
    fn select_prefers_earlier_candidates_on_ties() {
        let (dir, score) = Direction::select([
            (Direction::Stop, 0),
            (Direction::Diagonal, 3),
            (Direction::Horizontal, 3),
            (Direction::Vertical, 3),
        ]);
        assert_eq!((dir, score), (Direction::Diagonal, 3));

        let (dir, _) = Direction::select([
            (Direction::Diagonal, 1),
            (Direction::Horizontal, 2),
            (Direction::Vertical, 2),
        ]);
        assert_eq!(dir, Direction::Horizontal);
    }

    #[test]
    fn select_resets_on_zero_tie() {
        let (dir, score) = Direction::select([
            (Direction::Stop, 0),
            (Direction::Diagonal, 0),
            (Direction::Horizontal, -5),
            (Direction::Vertical, -5),
        ]);
        assert_eq!((dir, score), (Direction::Stop, 0));
    }

    #[test]
    fn direction_codes() {
        assert_eq!(Direction::Stop.code(), 0);
        assert_eq!(Direction::Diagonal.code(), 1);
        assert_eq!(Direction::Horizontal.code(), 2);
        assert_eq!(Direction::Vertical.code(), 3);
    }

    #[test]
    fn identity_ignores_gap_columns() {
        assert!((percent_identity("AC-GT", "ACTGA") - 60.0).abs() < 1e-9);
        assert!((percent_identity("--", "--") - 0.0).abs() < f64::EPSILON);
        assert!((percent_identity("", "") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cigar_string_mixed_ops() {
        let aln = alignment("ACG-TTA", "ACGATC-");
        assert_eq!(aln.cigar_string(), "3=1I1=1X1D");
        assert_eq!(aln.gaps(), 2);
        assert_eq!(aln.matches(), 4);
        assert_eq!(aln.len(), 7);
    }

    #[test]
    fn empty_alignment() {
        let aln = alignment("", "");
        assert!(aln.is_empty());
        assert!(aln.cigar().is_empty());
        assert!((aln.ident - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn output_accessors() {
        assert_eq!(AlignOutput::Score(5).score(), Some(5));
        assert_eq!(AlignOutput::Score(5).identity(), None);
        assert_eq!(AlignOutput::Identity(50.0).identity(), Some(50.0));
        let full = AlignOutput::Alignment(alignment("AC", "AC"));
        assert_eq!(full.identity(), Some(100.0));
        assert!(full.alignment().is_some());
        assert_eq!(full.into_alignment().unwrap().align(), ["AC", "AC"]);
    }

    #[test]
    fn cigar_op_display() {
        assert_eq!(CigarOp::Match(5).to_string(), "5=");
        assert_eq!(CigarOp::Mismatch(2).to_string(), "2X");
        assert_eq!(CigarOp::Insertion(1).to_string(), "1I");
        assert_eq!(CigarOp::Deletion(3).to_string(), "3D");
    }

    #[test]
    fn scored_trait() {
        use infoml_core::Scored;
        let mut aln = alignment("A", "A");
        aln.score = 42;
        assert!((Scored::score(&aln) - 42.0).abs() < f64::EPSILON);
    }
}
