//! Smith-Waterman local alignment with a linear gap penalty.
//!
//! ```text
//! T[0][*] = T[*][0] = 0
//! T[i][j] = max(0, T[i-1][j-1] + s(a[i-1], b[j-1]), T[i][j-1] + gap, T[i-1][j] + gap)
//! ```
//!
//! Ties go to the earliest candidate in `(reset, diagonal, horizontal,
//! vertical)` order. The score is the maximum anywhere in `T`, and traceback
//! starts from the first cell (row-major) holding it.

use log::{debug, trace};

use crate::matrix::{warn_if_large, DpMatrix};
use crate::params::LocalParams;
use crate::scoring::SubstitutionMatrix;
use crate::traceback::trace_back;
use crate::types::{percent, percent_identity, AlignOutput, Alignment, Direction, OutputMode};
use infoml_core::Result;

/// Perform local (Smith-Waterman) alignment of `a` against `b`.
///
/// The variant of the returned [`AlignOutput`] follows `params.output`.
/// Empty sequences are allowed and give a zero score.
///
/// # Errors
///
/// Returns [`infoml_core::InfomlError::UnknownSymbol`] if either sequence
/// holds a symbol the substitution matrix does not define, and
/// [`infoml_core::InfomlError::InvalidInput`] if the scores could overflow
/// `i32` for these lengths.
pub fn swalign(a: &[u8], b: &[u8], params: &LocalParams) -> Result<AlignOutput> {
    let submat = &params.submat;
    let ea = submat.encode(a)?;
    let eb = submat.encode(b)?;
    submat.check_score_range(a.len(), b.len(), params.gap)?;

    debug!(
        "smith-waterman {}x{} ({}, gap {}, {:?})",
        a.len(),
        b.len(),
        submat.name(),
        params.gap,
        params.output
    );

    let output = match params.output {
        OutputMode::Score => AlignOutput::Score(score_only(&ea, &eb, submat, params.gap)),
        OutputMode::Identity => AlignOutput::Identity(identity_only(&ea, &eb, submat, params.gap)),
        OutputMode::Alignment => {
            AlignOutput::Alignment(full_alignment(a, b, &ea, &eb, submat, params.gap))
        }
    };
    Ok(output)
}

/// Fill the local score table, reporting the move chosen for every interior cell.
fn fill(
    a: &[usize],
    b: &[usize],
    submat: &SubstitutionMatrix,
    gap: i32,
    mut record: impl FnMut(usize, usize, Direction),
) -> DpMatrix<i32> {
    let mut t = DpMatrix::new(a.len() + 1, b.len() + 1, 0i32);

    for i in 1..=a.len() {
        let sub = submat.row(a[i - 1]);
        for j in 1..=b.len() {
            let (dir, value) = Direction::select([
                (Direction::Stop, 0),
                (Direction::Diagonal, t.get(i - 1, j - 1) + sub[b[j - 1]]),
                (Direction::Horizontal, t.get(i, j - 1) + gap),
                (Direction::Vertical, t.get(i - 1, j) + gap),
            ]);
            t.set(i, j, value);
            record(i, j, dir);
        }
    }

    t
}

/// Best local score, keeping only two rows of the table.
fn score_only(a: &[usize], b: &[usize], submat: &SubstitutionMatrix, gap: i32) -> i32 {
    let cols = b.len() + 1;
    let mut prev = vec![0i32; cols];
    let mut curr = vec![0i32; cols];
    let mut best = 0;

    for &ai in a {
        let sub = submat.row(ai);
        for j in 1..cols {
            let value = 0
                .max(prev[j - 1] + sub[b[j - 1]])
                .max(curr[j - 1] + gap)
                .max(prev[j] + gap);
            curr[j] = value;
            best = best.max(value);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Percent identity along the optimal path, tracked with match-count and
/// path-length tables instead of a traceback.
fn identity_only(a: &[usize], b: &[usize], submat: &SubstitutionMatrix, gap: i32) -> f64 {
    let (rows, cols) = (a.len() + 1, b.len() + 1);
    warn_if_large(rows, cols, 3);

    let mut matches = DpMatrix::new(rows, cols, 0u32);
    let mut lengths = DpMatrix::new(rows, cols, 0u32);

    let t = fill(a, b, submat, gap, |i, j, dir| {
        let (mc, al) = match dir {
            Direction::Diagonal => (
                matches.get(i - 1, j - 1) + u32::from(a[i - 1] == b[j - 1]),
                lengths.get(i - 1, j - 1) + 1,
            ),
            Direction::Horizontal => (matches.get(i, j - 1), lengths.get(i, j - 1) + 1),
            Direction::Vertical => (matches.get(i - 1, j), lengths.get(i - 1, j) + 1),
            Direction::Stop => (0, 0),
        };
        matches.set(i, j, mc);
        lengths.set(i, j, al);
    });

    let (r, c) = t.argmax();
    trace!("local optimum {} at ({r}, {c})", t.get(r, c));
    percent(matches.get(r, c), lengths.get(r, c))
}

fn full_alignment(
    raw_a: &[u8],
    raw_b: &[u8],
    a: &[usize],
    b: &[usize],
    submat: &SubstitutionMatrix,
    gap: i32,
) -> Alignment {
    let (rows, cols) = (a.len() + 1, b.len() + 1);
    warn_if_large(rows, cols, 2);

    let mut directions = DpMatrix::new(rows, cols, Direction::Stop);
    let t = fill(a, b, submat, gap, |i, j, dir| directions.set(i, j, dir));

    let (r, c) = t.argmax();
    trace!("local optimum {} at ({r}, {c})", t.get(r, c));

    let path = trace_back(raw_a, raw_b, &directions, (r, c), |i, j| {
        t.get(i, j) == 0 && directions.get(i, j) == Direction::Stop
    });
    let ident = percent_identity(&path.aligned_a, &path.aligned_b);

    Alignment {
        score: t.get(r, c),
        aligned_a: path.aligned_a,
        aligned_b: path.aligned_b,
        ident,
        a_start: path.a_start,
        a_end: r,
        b_start: path.b_start,
        b_end: c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infoml_core::InfomlError;

    fn nt(match_score: i32, mismatch: i32, gap: i32) -> LocalParams {
        LocalParams::new(SubstitutionMatrix::nucleotide(match_score, mismatch), gap)
    }

    fn aligned(a: &[u8], b: &[u8], params: &LocalParams) -> Alignment {
        swalign(a, b, params).unwrap().into_alignment().unwrap()
    }

    #[test]
    fn local_match_in_flanks() {
        let aln = aligned(b"AAACGTAAA", b"TTTCGTTTT", &nt(2, -1, -5));
        assert_eq!(aln.score, 6);
        assert_eq!(aln.align(), ["CGT", "CGT"]);
        assert_eq!((aln.a_start, aln.a_end), (3, 6));
        assert_eq!((aln.b_start, aln.b_end), (3, 6));
        assert!((aln.ident - 100.0).abs() < 1e-9);
    }

    #[test]
    fn blosum62_with_gap() {
        let aln = aligned(b"HEAGAWGHEE", b"PAWHEAE", &LocalParams::default());
        assert_eq!(aln.score, 23);
        assert_eq!(aln.align(), ["AWGHE", "AW-HE"]);
        assert_eq!((aln.a_start, aln.a_end), (4, 9));
        assert_eq!((aln.b_start, aln.b_end), (1, 5));
        assert!((aln.ident - 80.0).abs() < 1e-9);
        assert_eq!(aln.cigar_string(), "2=1D2=");
    }

    #[test]
    fn self_alignment_walks_the_diagonal() {
        let seq = b"HEAGAWGHEE";
        let aln = aligned(seq, seq, &LocalParams::default());
        assert_eq!(aln.score, 62);
        assert_eq!(aln.aligned_a, "HEAGAWGHEE");
        assert!((aln.ident - 100.0).abs() < 1e-9);
    }

    #[test]
    fn modes_agree() {
        let params = LocalParams::default();
        let (a, b) = (b"MKTAYIAKQR".as_slice(), b"KTAYIAK".as_slice());
        let full = aligned(a, b, &params);
        assert_eq!(full.score, 34);
        assert_eq!(full.aligned_a, "KTAYIAK");

        let score = swalign(a, b, &params.clone().score_only()).unwrap();
        assert_eq!(score, AlignOutput::Score(34));

        let ident = swalign(a, b, &params.ident_only()).unwrap();
        assert_eq!(ident, AlignOutput::Identity(100.0));
    }

    #[test]
    fn no_positive_region_gives_empty_alignment() {
        let params = nt(1, -1, -1);
        let aln = aligned(b"AAAA", b"CCCC", &params);
        assert_eq!(aln.score, 0);
        assert!(aln.is_empty());
        assert_eq!(aln.ident, 0.0);

        let ident = swalign(b"AAAA", b"CCCC", &params.ident_only()).unwrap();
        assert_eq!(ident, AlignOutput::Identity(0.0));
    }

    #[test]
    fn empty_sequences() {
        let params = nt(1, -1, -1);
        assert_eq!(
            swalign(b"", b"ACGT", &params.clone().score_only()).unwrap(),
            AlignOutput::Score(0)
        );
        assert_eq!(
            swalign(b"ACGT", b"", &params.clone().ident_only()).unwrap(),
            AlignOutput::Identity(0.0)
        );
        let aln = aligned(b"", b"", &params);
        assert_eq!(aln.score, 0);
        assert!(aln.is_empty());
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = swalign(b"ACGU", b"ACGT", &nt(1, -1, -1)).unwrap_err();
        assert!(matches!(err, InfomlError::UnknownSymbol { symbol: 'U', .. }));

        let err = swalign(b"HEAJ", b"HEA", &LocalParams::default().score_only()).unwrap_err();
        assert!(matches!(err, InfomlError::UnknownSymbol { symbol: 'J', .. }));
    }

    #[test]
    fn three_way_tie_records_diagonal() {
        // s(A,A) = s(C,C) = 2, s(A,C) = 1, gap 0: at (2, 2) the diagonal,
        // horizontal and vertical candidates all score 2.
        let m = SubstitutionMatrix::uniform("AC", b"AC", 2, 1).unwrap();
        let a = m.encode(b"AC").unwrap();
        let b = m.encode(b"CA").unwrap();

        let mut directions = DpMatrix::new(3, 3, Direction::Stop);
        let t = fill(&a, &b, &m, 0, |i, j, dir| directions.set(i, j, dir));
        assert_eq!(t.get(1, 1), 1);
        assert_eq!(t.get(2, 1), 2);
        assert_eq!(t.get(1, 2), 2);
        assert_eq!(t.get(2, 2), 2);
        assert_eq!(directions.get(2, 2), Direction::Diagonal);

        let params = LocalParams::new(m, 0);
        let first = aligned(b"AC", b"CA", &params);
        for _ in 0..10 {
            assert_eq!(aligned(b"AC", b"CA", &params), first);
        }
        assert_eq!(first.align(), ["A", "A"]);
    }

    #[test]
    fn zero_valued_cell_resets() {
        let m = SubstitutionMatrix::nucleotide(1, -1);
        let a = m.encode(b"AC").unwrap();
        let b = m.encode(b"AG").unwrap();
        let mut directions = DpMatrix::new(3, 3, Direction::Stop);
        let t = fill(&a, &b, &m, -5, |i, j, dir| directions.set(i, j, dir));
        assert_eq!(t.get(2, 2), 0);
        assert_eq!(directions.get(2, 2), Direction::Stop);
        assert_eq!(directions.get(1, 1), Direction::Diagonal);
    }

    #[test]
    fn overflowing_scores_are_rejected() {
        let params = nt(i32::MAX / 2, -1, -1).score_only();
        let err = swalign(b"AAA", b"AAA", &params).unwrap_err();
        assert!(matches!(err, InfomlError::InvalidInput(_)));

        let err = swalign(b"AAA", b"AAA", &nt(1, -1, i32::MIN)).unwrap_err();
        assert!(matches!(err, InfomlError::InvalidInput(_)));
    }

    #[test]
    fn large_scores_within_range_still_align() {
        let params = nt(1_000_000, -1, -1).score_only();
        assert_eq!(
            swalign(b"AAA", b"AAA", &params).unwrap(),
            AlignOutput::Score(3_000_000)
        );
    }

    #[test]
    fn case_insensitive_input() {
        let params = nt(1, -1, -1);
        let aln = aligned(b"acgt", b"ACGT", &params);
        assert_eq!(aln.score, 4);
        assert!((aln.ident - 100.0).abs() < 1e-9);
    }
}
