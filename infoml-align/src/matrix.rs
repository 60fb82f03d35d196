//! Dense dynamic-programming tables.
//!
//! All engines index their tables as `(i, j)` where `i` walks the first
//! sequence (rows) and `j` the second (columns). Storage is a single
//! row-major `Vec`.

use core::ops::{Index, IndexMut};

use log::warn;

/// Table size (in cells) above which the engines warn about memory use.
pub const LARGE_MATRIX_CELLS: usize = 50_000_000;

/// A dense `rows x cols` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> DpMatrix<T> {
    /// Allocate a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.cols + j] = value;
    }

    /// Cells of row `i`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl<T: Copy + Ord> DpMatrix<T> {
    /// Position of the largest cell; the first in row-major order wins ties.
    ///
    /// Returns `(0, 0)` for an empty grid.
    pub fn argmax(&self) -> (usize, usize) {
        let mut best = 0;
        for (k, value) in self.data.iter().enumerate() {
            if *value > self.data[best] {
                best = k;
            }
        }
        if self.cols == 0 {
            return (0, 0);
        }
        (best / self.cols, best % self.cols)
    }
}

impl<T> Index<(usize, usize)> for DpMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DpMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.cols + j]
    }
}

/// Log a warning when `tables` full grids of `rows x cols` would be large.
pub(crate) fn warn_if_large(rows: usize, cols: usize, tables: usize) {
    let cells = rows.saturating_mul(cols);
    if cells > LARGE_MATRIX_CELLS {
        warn!(
            "allocating {tables} DP table(s) of {rows}x{cols} ({cells} cells each); \
             memory grows quadratically with sequence length"
        );
    }
}
