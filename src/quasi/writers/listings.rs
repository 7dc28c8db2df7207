//! FASTA listings of reconstructed haplotypes, corrected reads and
//! per-read cluster membership.
//!
//! Each listing is built as a list of [`FastaRecord`]s and handed to
//! [`write_records`]. Sequence transforms are optional; `None` writes the
//! sequences as they are.

use super::fasta::{write_records, FastaRecord};
use crate::quasi::{genotype::Genotype, posteriors::PosteriorMatrix, reads::AlignedRead};
use crate::utils::{strip_gaps, QsResult, Result};
use itertools::Itertools;
use std::{collections::HashMap, io::Write};

pub type SeqTransform<'a> = Option<&'a dyn Fn(&str) -> String>;

fn apply(transform: SeqTransform, seq: &str) -> String {
    match transform {
        Some(f) => f(seq),
        None => seq.to_string(),
    }
}

fn by_descending_freq(genotypes: &[Genotype]) -> impl Iterator<Item = &Genotype> {
    genotypes
        .iter()
        .sorted_by(|a, b| b.freq.total_cmp(&a.freq))
}

/// One record per distinct sequence, headed `read_freq=<freq>`.
///
/// Genotypes sharing a sequence collapse into one record carrying the
/// frequency of the last of them; records follow first appearance.
pub fn freq_listing(genotypes: &[Genotype]) -> Vec<FastaRecord> {
    let mut order: Vec<&str> = Vec::new();
    let mut freqs: HashMap<&str, f64> = HashMap::new();
    for genotype in genotypes {
        if freqs.insert(&genotype.seq, genotype.freq).is_none() {
            order.push(&genotype.seq);
        }
    }

    order
        .into_iter()
        .map(|seq| FastaRecord::new(format!("read_freq={:.10}", freqs[seq]), seq))
        .collect()
}

/// Expands every genotype into `floor(freq * num_reads)` identical reads,
/// most frequent genotype first, headed `read<index>_freq_<freq>`.
pub fn expanded_read_listing(
    genotypes: &[Genotype],
    num_reads: usize,
    transform: SeqTransform,
) -> Vec<FastaRecord> {
    let total = num_reads as f64;
    by_descending_freq(genotypes)
        .flat_map(|genotype| {
            let multiplicity = (genotype.freq * total).floor() as usize;
            let seq = apply(transform, &genotype.seq);
            itertools::repeat_n((genotype.freq, seq), multiplicity)
        })
        .enumerate()
        .map(|(index, (freq, seq))| {
            FastaRecord::new(format!("read{}_freq_{:.10}", index, freq), seq)
        })
        .collect()
}

/// Genotypes by descending frequency, headed `haplotype<ID>_freq_<freq>`.
pub fn haplotype_listing(genotypes: &[Genotype], transform: SeqTransform) -> Vec<FastaRecord> {
    by_descending_freq(genotypes)
        .map(|genotype| {
            FastaRecord::new(
                format!("haplotype{}_freq_{:.10}", genotype.id, genotype.freq),
                apply(transform, &genotype.seq),
            )
        })
        .collect()
}

/// Ungapped reads headed `read<index>` followed by `_h<ID>=<posterior>` for
/// every genotype, in genotype order.
pub fn clustered_read_listing(
    reads: &[AlignedRead],
    genotypes: &[Genotype],
    pqrs: &PosteriorMatrix,
) -> QsResult<Vec<FastaRecord>> {
    pqrs.check_shape(genotypes.len(), reads.len())?;

    let records = reads
        .iter()
        .enumerate()
        .map(|(read_pos, read)| {
            let memberships = genotypes
                .iter()
                .enumerate()
                .map(|(hap_pos, genotype)| {
                    format!("_h{}={:.5}", genotype.id, pqrs.get(hap_pos, read_pos))
                })
                .join("");
            FastaRecord::new(format!("read{}{}", read_pos, memberships), strip_gaps(&read.seq))
        })
        .collect();
    Ok(records)
}

pub fn write_freq_listing<W: Write>(sink: W, genotypes: &[Genotype]) -> Result<usize> {
    write_records(sink, freq_listing(genotypes))
}

pub fn write_expanded_reads<W: Write>(
    sink: W,
    genotypes: &[Genotype],
    num_reads: usize,
    transform: SeqTransform,
) -> Result<usize> {
    write_records(sink, expanded_read_listing(genotypes, num_reads, transform))
}

pub fn write_haplotypes<W: Write>(
    sink: W,
    genotypes: &[Genotype],
    transform: SeqTransform,
) -> Result<usize> {
    write_records(sink, haplotype_listing(genotypes, transform))
}

pub fn write_clustered_reads<W: Write>(
    sink: W,
    reads: &[AlignedRead],
    genotypes: &[Genotype],
    pqrs: &PosteriorMatrix,
) -> Result<usize> {
    let records = clustered_read_listing(reads, genotypes, pqrs)?;
    write_records(sink, records)
}
