use crate::quasi::reads::AlignedRead;
use crate::utils::{load_aligned_fasta, Result};
use std::path::Path;

/// A reconstructed haplotype candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Genotype {
    /// Stable identifier used in output headers.
    pub id: usize,
    pub seq: String,
    /// Relative abundance; meaningful only once assigned by the EM stage.
    pub freq: f64,
}

impl Genotype {
    pub fn new(id: usize, seq: impl Into<String>, freq: f64) -> Self {
        Self {
            id,
            seq: seq.into(),
            freq,
        }
    }

    /// Candidate haplotype carrying a seed read's sequence and a placeholder frequency.
    pub fn from_read(id: usize, read: &AlignedRead) -> Self {
        Self::new(id, read.seq.clone(), 0.0)
    }

    /// Parses a `haplotype<ID>_freq_<FREQ>` header.
    pub fn parse_header(header: &str) -> Result<(usize, f64)> {
        let error_msg = || format!("Invalid haplotype header: {}", header);
        let rest = header.strip_prefix("haplotype").ok_or_else(error_msg)?;
        let (id, freq) = rest.split_once("_freq_").ok_or_else(error_msg)?;
        let id: usize = id.parse().map_err(|_| error_msg())?;
        let freq: f64 = freq.parse().map_err(|_| error_msg())?;
        if !(0.0..=1.0).contains(&freq) {
            return Err(format!(
                "Haplotype {} frequency must be between 0.0 and 1.0, got: {}",
                id, freq
            ));
        }
        Ok((id, freq))
    }
}

/// Loads haplotypes written in the haplotype-listing format.
pub fn load_haplotypes(path: &Path) -> Result<Vec<Genotype>> {
    let mut genotypes = Vec::new();
    for (header, seq) in load_aligned_fasta(path)? {
        let (id, freq) = Genotype::parse_header(&header)?;
        genotypes.push(Genotype::new(id, seq, freq));
    }
    log::debug!(
        "Loaded {} haplotypes from {}",
        genotypes.len(),
        path.display()
    );
    Ok(genotypes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_read_copies_sequence() {
        let read = AlignedRead::new("r7", "AC-GT");
        let genotype = Genotype::from_read(3, &read);
        assert_eq!(genotype.id, 3);
        assert_eq!(genotype.seq, "AC-GT");
        assert_eq!(genotype.freq, 0.0);
    }

    #[test]
    fn parse_valid_header() {
        assert_eq!(
            Genotype::parse_header("haplotype12_freq_0.2500000000"),
            Ok((12, 0.25))
        );
    }

    #[test]
    fn parse_invalid_headers() {
        assert_eq!(
            Genotype::parse_header("hap1_freq_0.5"),
            Err("Invalid haplotype header: hap1_freq_0.5".to_string())
        );
        assert!(Genotype::parse_header("haplotype1_freq_x").is_err());
        assert!(Genotype::parse_header("haplotypeA_freq_0.5").is_err());
        assert!(Genotype::parse_header("haplotype1_freq_1.5").is_err());
    }

    #[test]
    fn load_haplotypes_from_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haplotypes.fa");
        std::fs::write(
            &path,
            ">haplotype4_freq_0.7000000000\nACGT\n>haplotype9_freq_0.3000000000\nAC-T\n",
        )
        .unwrap();
        let genotypes = load_haplotypes(&path).unwrap();
        assert_eq!(
            genotypes,
            vec![Genotype::new(4, "ACGT", 0.7), Genotype::new(9, "AC-T", 0.3)]
        );

        std::fs::write(&path, ">haplotype1_freq_1.0\nAC  \n").unwrap();
        let genotypes = load_haplotypes(&path).unwrap();
        assert_eq!(genotypes, vec![Genotype::new(1, "AC  ", 1.0)]);
    }
}
