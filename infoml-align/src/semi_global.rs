//! Semiglobal alignment: Needleman-Wunsch with free end gaps.
//!
//! Differences from local alignment:
//!
//! 1. **Fill**: no reset to zero, so scores may go negative.
//! 2. **Endpoint**: the maximum over the last row *or* last column, i.e. any
//!    trailing overhang of either sequence is free.
//! 3. **Traceback**: stops on the first row or column, since leading
//!    overhangs are free as well.
//!
//! Ties inside the recurrence go to the earliest of `(diagonal, horizontal,
//! vertical)`.

use log::{debug, trace};

use crate::matrix::{warn_if_large, DpMatrix};
use crate::scoring::SubstitutionMatrix;
use crate::traceback::trace_back;
use crate::types::{percent, percent_identity, AlignOutput, Alignment, Direction, OutputMode};
use infoml_core::Result;

/// Perform semiglobal alignment of `a` against `b`.
///
/// # Errors
///
/// Returns [`infoml_core::InfomlError::UnknownSymbol`] if either sequence
/// holds a symbol the substitution matrix does not define, and
/// [`infoml_core::InfomlError::InvalidInput`] if the scores could overflow
/// `i32` for these lengths.
pub fn semi_global(
    a: &[u8],
    b: &[u8],
    submat: &SubstitutionMatrix,
    gap: i32,
    output: OutputMode,
) -> Result<AlignOutput> {
    let ea = submat.encode(a)?;
    let eb = submat.encode(b)?;
    submat.check_score_range(a.len(), b.len(), gap)?;

    debug!(
        "semiglobal {}x{} ({}, gap {gap}, {output:?})",
        a.len(),
        b.len(),
        submat.name()
    );

    let result = match output {
        OutputMode::Score => AlignOutput::Score(score_only(&ea, &eb, submat, gap)),
        OutputMode::Identity => AlignOutput::Identity(identity_only(&ea, &eb, submat, gap)),
        OutputMode::Alignment => {
            AlignOutput::Alignment(full_alignment(a, b, &ea, &eb, submat, gap))
        }
    };
    Ok(result)
}

fn fill(
    a: &[usize],
    b: &[usize],
    submat: &SubstitutionMatrix,
    gap: i32,
    mut record: impl FnMut(usize, usize, Direction),
) -> DpMatrix<i32> {
    // Zero borders: leading gaps are free.
    let mut t = DpMatrix::new(a.len() + 1, b.len() + 1, 0i32);

    for i in 1..=a.len() {
        let sub = submat.row(a[i - 1]);
        for j in 1..=b.len() {
            let (dir, value) = Direction::select([
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

/// Best cell of the last row, then the last column; first strictly greater wins.
fn endpoint(t: &DpMatrix<i32>) -> (usize, usize) {
    let m = t.rows() - 1;
    let n = t.cols() - 1;
    let mut best = (m, 0);

    for j in 1..=n {
        if t.get(m, j) > t.get(best.0, best.1) {
            best = (m, j);
        }
    }
    for i in 0..=m {
        if t.get(i, n) > t.get(best.0, best.1) {
            best = (i, n);
        }
    }

    best
}

fn score_only(a: &[usize], b: &[usize], submat: &SubstitutionMatrix, gap: i32) -> i32 {
    let cols = b.len() + 1;
    let mut prev = vec![0i32; cols];
    let mut curr = vec![0i32; cols];
    // T[0][B] is always a candidate endpoint.
    let mut best = 0;

    for &ai in a {
        let sub = submat.row(ai);
        for j in 1..cols {
            curr[j] = (prev[j - 1] + sub[b[j - 1]])
                .max(curr[j - 1] + gap)
                .max(prev[j] + gap);
        }
        best = best.max(curr[cols - 1]);
        std::mem::swap(&mut prev, &mut curr);
    }

    // `prev` now holds the last row.
    prev.iter().copied().fold(best, i32::max)
}

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

    let (r, c) = endpoint(&t);
    trace!("semiglobal endpoint {} at ({r}, {c})", t.get(r, c));
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

    let (r, c) = endpoint(&t);
    trace!("semiglobal endpoint {} at ({r}, {c})", t.get(r, c));

    let path = trace_back(raw_a, raw_b, &directions, (r, c), |i, j| i == 0 || j == 0);
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
