//! Aligned reads and their loading from FASTA input.

use super::distance::hamming_distance;
use crate::utils::{load_aligned_fasta, QsResult, Result};
use std::path::Path;

/// A single read projected onto the common alignment frame.
///
/// Reads compare by entity, not by content: two reads carrying the same
/// sequence text are still distinct reads. There is deliberately no
/// `PartialEq` impl.
#[derive(Debug, Clone)]
pub struct AlignedRead {
    /// Identifier from the FASTA header.
    pub name: String,
    /// Aligned bases, including `-` and ` ` placeholders.
    pub seq: String,
}

impl AlignedRead {
    pub fn new(name: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
        }
    }

    /// Hamming distance to another read, zero without comparing bases when
    /// `other` is this very read.
    pub fn distance(&self, other: &AlignedRead) -> QsResult<usize> {
        if std::ptr::eq(self, other) {
            return Ok(0);
        }
        hamming_distance(&self.seq, &other.seq)
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Loads every record of an aligned FASTA file, keeping file order.
pub fn load_reads(path: &Path) -> Result<Vec<AlignedRead>> {
    let reads: Vec<AlignedRead> = load_aligned_fasta(path)?
        .into_iter()
        .map(|(name, seq)| AlignedRead::new(name, seq))
        .collect();
    log::debug!("Loaded {} reads from {}", reads.len(), path.display());
    Ok(reads)
}
