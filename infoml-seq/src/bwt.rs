//! Burrows-Wheeler Transform (BWT) with a `$` end-of-text sentinel.
//!
//! The forward transform sorts suffixes rather than full rotations. Because
//! the sentinel occurs exactly once, two rotations always differ at or
//! before the sentinel of the shorter suffix, so both orders agree and the
//! output is byte-identical to the rotation-table construction.
//!
//! The inverse uses LF-mapping, which recovers the same row the iterative
//! "prepend and re-sort" table reconstruction would.

use infoml_core::{InfomlError, Result};
use log::trace;

/// End-of-text marker appended before transforming.
pub const SENTINEL: u8 = b'$';

/// Burrows-Wheeler Transform of a byte string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bwt {
    /// The BWT string (text length + 1, exactly one sentinel).
    bwt: Vec<u8>,
    /// Position of the sentinel in the BWT.
    primary_index: usize,
}

impl Bwt {
    /// Build the BWT of `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` already contains the sentinel.
    ///
    /// # Example
    ///
    /// ```
    /// use infoml_seq::bwt::Bwt;
    ///
    /// let bwt = Bwt::build(b"banana").unwrap();
    /// assert_eq!(bwt.as_bytes(), b"annb$aa");
    /// ```
    pub fn build(text: &[u8]) -> Result<Self> {
        if let Some(pos) = text.iter().position(|&c| c == SENTINEL) {
            return Err(InfomlError::InvalidInput(format!(
                "text contains the BWT sentinel '$' at position {pos}"
            )));
        }

        let mut augmented = Vec::with_capacity(text.len() + 1);
        augmented.extend_from_slice(text);
        augmented.push(SENTINEL);
        let n = augmented.len();

        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| augmented[a..].cmp(&augmented[b..]));

        // Last column of sorted rotations = text[(sa[i] - 1) mod n]
        let mut bwt = Vec::with_capacity(n);
        let mut primary_index = 0;
        for (i, &pos) in sa.iter().enumerate() {
            if pos == 0 {
                bwt.push(augmented[n - 1]);
                primary_index = i;
            } else {
                bwt.push(augmented[pos - 1]);
            }
        }

        trace!("bwt of {} bytes, sentinel at {primary_index}", text.len());
        Ok(Self { bwt, primary_index })
    }

    /// Wrap an existing BWT string.
    ///
    /// # Errors
    ///
    /// Returns an error unless `bwt` contains the sentinel exactly once.
    pub fn from_bytes(bwt: &[u8]) -> Result<Self> {
        let mut sentinels = bwt.iter().enumerate().filter(|&(_, &c)| c == SENTINEL);
        match (sentinels.next(), sentinels.next()) {
            (Some((primary_index, _)), None) => Ok(Self {
                bwt: bwt.to_vec(),
                primary_index,
            }),
            (None, _) => Err(InfomlError::InvalidInput(
                "BWT string has no '$' sentinel".into(),
            )),
            (Some(_), Some(_)) => Err(InfomlError::InvalidInput(
                "BWT string has more than one '$' sentinel".into(),
            )),
        }
    }

    /// The BWT string as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bwt
    }

    /// Position of the sentinel character (`$`) in the BWT.
    pub fn primary_index(&self) -> usize {
        self.primary_index
    }

    /// Length of the BWT (including sentinel).
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    /// Whether the transformed text was empty (the BWT is just `$`).
    pub fn is_empty(&self) -> bool {
        self.bwt.len() <= 1
    }

    /// Reconstruct the original text (without sentinel).
    ///
    /// # Example
    ///
    /// ```
    /// use infoml_seq::bwt::Bwt;
    ///
    /// let bwt = Bwt::from_bytes(b"annb$aa").unwrap();
    /// assert_eq!(bwt.invert(), b"banana");
    /// ```
    pub fn invert(&self) -> Vec<u8> {
        let n = self.bwt.len();
        if n <= 1 {
            return vec![];
        }

        let mut counts = [0usize; 256];
        for &b in &self.bwt {
            counts[b as usize] += 1;
        }

        // c_table[c] = number of characters in the BWT that are < c,
        // i.e. the first sorted row starting with c.
        let mut c_table = [0usize; 256];
        let mut cumulative = 0;
        for (slot, &count) in c_table.iter_mut().zip(counts.iter()) {
            *slot = cumulative;
            cumulative += count;
        }

        // occ[i] = rank of bwt[i] among equal characters in bwt[..i]
        let mut running = [0usize; 256];
        let mut occ = Vec::with_capacity(n);
        for &b in &self.bwt {
            occ.push(running[b as usize]);
            running[b as usize] += 1;
        }

        // The row starting with the sentinel ends with the last text symbol;
        // LF-mapping steps one symbol further left each time.
        let text_len = n - 1;
        let mut result = vec![0u8; text_len];
        let mut row = c_table[SENTINEL as usize];
        for slot in result.iter_mut().rev() {
            let c = self.bwt[row];
            *slot = c;
            row = c_table[c as usize] + occ[row];
        }

        result
    }
}

/// Forward BWT of an ASCII string.
///
/// # Errors
///
/// Returns an error for non-ASCII input or input containing `$`.
pub fn transform(sequence: &str) -> Result<String> {
    let bwt = Bwt::build(ascii(sequence)?)?;
    Ok(bwt.as_bytes().iter().map(|&c| c as char).collect())
}

/// Inverse BWT of an ASCII string holding exactly one `$`.
///
/// # Errors
///
/// Returns an error for non-ASCII input or a missing/repeated sentinel.
pub fn inverse(sequence: &str) -> Result<String> {
    let bwt = Bwt::from_bytes(ascii(sequence)?)?;
    Ok(bwt.invert().iter().map(|&c| c as char).collect())
}

fn ascii(s: &str) -> Result<&[u8]> {
    if !s.is_ascii() {
        return Err(InfomlError::InvalidInput(
            "BWT strings must be ASCII".into(),
        ));
    }
    Ok(s.as_bytes())
}
