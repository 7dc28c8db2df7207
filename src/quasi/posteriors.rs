use crate::utils::{open_input_reader, QsError, QsResult, Result};
use std::{io::BufRead, path::Path};

/// Per-read cluster membership probabilities, indexed `[haplotype][read]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorMatrix {
    rows: Vec<Vec<f64>>,
}

impl PosteriorMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = open_input_reader(path)?;
        Self::from_reader(reader).map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Parses one whitespace-separated row of probabilities per line; blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|value| {
                    value.parse::<f64>().map_err(|_| {
                        format!(
                            "Invalid probability at line {}: {}",
                            line_number + 1,
                            value
                        )
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }
        Ok(Self { rows })
    }

    pub fn num_haplotypes(&self) -> usize {
        self.rows.len()
    }

    /// Probability that read `read_pos` was generated by haplotype `haplotype_pos`.
    pub fn get(&self, haplotype_pos: usize, read_pos: usize) -> f64 {
        self.rows[haplotype_pos][read_pos]
    }

    /// Verifies the matrix covers exactly `num_haplotypes` x `num_reads` entries.
    pub fn check_shape(&self, num_haplotypes: usize, num_reads: usize) -> QsResult<()> {
        if self.rows.len() != num_haplotypes {
            return Err(QsError::InvalidInput(format!(
                "Posterior matrix has {} rows, expected one per haplotype ({})",
                self.rows.len(),
                num_haplotypes
            )));
        }
        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_reads)
        {
            return Err(QsError::InvalidInput(format!(
                "Posterior matrix row {} has {} columns, expected one per read ({})",
                index,
                row.len(),
                num_reads
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matrix_from_reader() {
        let data = "\
0.9\t0.1\n\
\n\
0.2 0.8\n";
        let matrix = PosteriorMatrix::from_reader(std::io::Cursor::new(data)).unwrap();
        assert_eq!(matrix.num_haplotypes(), 2);
        assert_eq!(matrix.get(0, 1), 0.1);
        assert_eq!(matrix.get(1, 0), 0.2);
        assert!(matrix.check_shape(2, 2).is_ok());
    }

    #[test]
    fn parse_matrix_invalid_value() {
        let data = "0.9 0.1\n0.2 abc\n";
        let result = PosteriorMatrix::from_reader(std::io::Cursor::new(data));
        assert_eq!(
            result,
            Err("Invalid probability at line 2: abc".to_string())
        );
    }

    #[test]
    fn shape_mismatch_is_invalid_input() {
        let matrix = PosteriorMatrix::new(vec![vec![0.5, 0.5], vec![1.0]]);
        assert!(matches!(
            matrix.check_shape(2, 2),
            Err(QsError::InvalidInput(_))
        ));
        assert!(matrix.check_shape(3, 2).is_err());
    }
}
