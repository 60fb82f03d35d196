//! Path reconstruction from a filled direction table.

use crate::matrix::DpMatrix;
use crate::scoring::GAP;
use crate::types::Direction;

/// Aligned strings recovered by a traceback, plus where the path started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Trace {
    pub aligned_a: String,
    pub aligned_b: String,
    pub a_start: usize,
    pub b_start: usize,
}

/// Walk `directions` backwards from `end` until `stop(i, j)` holds or a
/// [`Direction::Stop`] cell is reached.
pub(crate) fn trace_back(
    a: &[u8],
    b: &[u8],
    directions: &DpMatrix<Direction>,
    end: (usize, usize),
    mut stop: impl FnMut(usize, usize) -> bool,
) -> Trace {
    let (mut i, mut j) = end;
    let mut rev_a = Vec::new();
    let mut rev_b = Vec::new();

    while !stop(i, j) {
        match directions.get(i, j) {
            Direction::Diagonal => {
                i -= 1;
                j -= 1;
                rev_a.push(a[i]);
                rev_b.push(b[j]);
            }
            Direction::Horizontal => {
                j -= 1;
                rev_a.push(GAP);
                rev_b.push(b[j]);
            }
            Direction::Vertical => {
                i -= 1;
                rev_a.push(a[i]);
                rev_b.push(GAP);
            }
            Direction::Stop => break,
        }
    }

    Trace {
        aligned_a: rev_a.iter().rev().map(|&c| c as char).collect(),
        aligned_b: rev_b.iter().rev().map(|&c| c as char).collect(),
        a_start: i,
        b_start: j,
    }
}
