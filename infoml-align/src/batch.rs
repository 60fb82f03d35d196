//! Batch pairwise alignment over many independent sequence pairs.
//!
//! Each pair is aligned on its own; with the `parallel` feature the pairs are
//! spread over rayon's thread pool.

use crate::needleman_wunsch::nwalign;
use crate::params::{GlobalParams, LocalParams};
use crate::smith_waterman::swalign;
use crate::types::AlignOutput;
use infoml_core::Result;

/// An engine together with its parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aligner {
    /// Smith-Waterman.
    Local(LocalParams),
    /// Needleman-Wunsch (semiglobal or global).
    Global(GlobalParams),
}

impl Aligner {
    /// Align one pair.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn align(&self, a: &[u8], b: &[u8]) -> Result<AlignOutput> {
        match self {
            Aligner::Local(params) => swalign(a, b, params),
            Aligner::Global(params) => nwalign(a, b, params),
        }
    }
}

impl From<LocalParams> for Aligner {
    fn from(params: LocalParams) -> Self {
        Aligner::Local(params)
    }
}

impl From<GlobalParams> for Aligner {
    fn from(params: GlobalParams) -> Self {
        Aligner::Global(params)
    }
}

/// Align a batch of sequence pairs; results keep the input order.
///
/// # Errors
///
/// Returns the first error encountered; no partial results are returned.
pub fn align_batch(pairs: &[(&[u8], &[u8])], aligner: &Aligner) -> Result<Vec<AlignOutput>> {
    log::debug!("aligning batch of {} pairs", pairs.len());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(a, b)| aligner.align(a, b))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        pairs.iter().map(|(a, b)| aligner.align(a, b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SubstitutionMatrix;

    fn local_nt() -> Aligner {
        LocalParams::new(SubstitutionMatrix::nucleotide(2, -1), -5).into()
    }

    #[test]
    fn batch_multiple_pairs() {
        let pairs: Vec<(&[u8], &[u8])> = vec![
            (b"ACGT", b"ACGT"),
            (b"AAAA", b"TTTT"),
            (b"AAACGTAAA", b"TTTCGTTTT"),
        ];
        let results = align_batch(&pairs, &local_nt()).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score(), Some(8));
        assert_eq!(results[1].score(), Some(0));
        assert_eq!(results[2].score(), Some(6));
    }

    #[test]
    fn batch_global_mode() {
        let aligner: Aligner = GlobalParams::new().penalize_end_gaps(true).score_only().into();
        let pairs: Vec<(&[u8], &[u8])> = vec![(b"AAAA", b"CCCC"), (b"ACGT", b"ACGT")];
        let results = align_batch(&pairs, &aligner).unwrap();
        assert_eq!(results, vec![AlignOutput::Score(-4), AlignOutput::Score(4)]);
    }

    #[test]
    fn empty_batch() {
        let pairs: Vec<(&[u8], &[u8])> = vec![];
        assert!(align_batch(&pairs, &local_nt()).unwrap().is_empty());
    }

    #[test]
    fn any_failure_fails_the_batch() {
        let pairs: Vec<(&[u8], &[u8])> = vec![(b"ACGT", b"ACGT"), (b"ACGN", b"ACGT")];
        assert!(align_batch(&pairs, &local_nt()).is_err());
    }
}
