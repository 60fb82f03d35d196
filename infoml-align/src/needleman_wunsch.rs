//! Needleman-Wunsch global and semiglobal alignment with a linear gap penalty.
//!
//! [`nwalign`] resolves the substitution matrix from [`GlobalParams`] and
//! dispatches on `penalize_end_gaps`:
//!
//! - `false` — semiglobal ([`crate::semi_global`]), all output modes.
//! - `true` — true global: `T[i][0] = i * gap`, `T[0][j] = j * gap`, answer
//!   at `T[A][B]`. Only the score is available; identity and alignment
//!   output return [`InfomlError::NotImplemented`].

use log::debug;

use crate::params::GlobalParams;
use crate::scoring::SubstitutionMatrix;
use crate::semi_global::semi_global;
use crate::types::{AlignOutput, OutputMode};
use infoml_core::{InfomlError, Result};

/// Perform global or semiglobal alignment of `a` against `b`.
///
/// # Errors
///
/// Returns [`InfomlError::UnknownSymbol`] for symbols outside the resolved
/// matrix, [`InfomlError::InvalidInput`] when the scores could overflow
/// `i32`, and [`InfomlError::NotImplemented`] for identity or alignment
/// output with `penalize_end_gaps` set.
pub fn nwalign(a: &[u8], b: &[u8], params: &GlobalParams) -> Result<AlignOutput> {
    let submat = params.resolve_submat();

    if !params.penalize_end_gaps {
        return semi_global(a, b, &submat, params.gap, params.output);
    }

    match params.output {
        OutputMode::Score => global_score(a, b, &submat, params.gap).map(AlignOutput::Score),
        mode => Err(InfomlError::NotImplemented(format!(
            "{mode:?} output for global alignment with penalized end gaps"
        ))),
    }
}

/// Global alignment score with end gaps penalized, computed one row at a time.
///
/// # Errors
///
/// Returns [`InfomlError::UnknownSymbol`] if either sequence holds a symbol
/// the matrix does not define, or [`InfomlError::InvalidInput`] if the scores
/// could overflow `i32`.
pub fn global_score(a: &[u8], b: &[u8], submat: &SubstitutionMatrix, gap: i32) -> Result<i32> {
    let ea = submat.encode(a)?;
    let eb = submat.encode(b)?;
    submat.check_score_range(a.len(), b.len(), gap)?;

    debug!(
        "needleman-wunsch {}x{} ({}, gap {gap})",
        a.len(),
        b.len(),
        submat.name()
    );

    let cols = eb.len() + 1;
    let mut prev: Vec<i32> = (0..cols).map(|j| j as i32 * gap).collect();
    let mut curr = vec![0i32; cols];

    for (i, &ai) in ea.iter().enumerate() {
        let sub = submat.row(ai);
        curr[0] = (i as i32 + 1) * gap;
        for j in 1..cols {
            curr[j] = (prev[j - 1] + sub[eb[j - 1]])
                .max(curr[j - 1] + gap)
                .max(prev[j] + gap);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[cols - 1])
}
