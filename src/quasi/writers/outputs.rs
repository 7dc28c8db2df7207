//! Provisioning of the report output directory and its five FASTA files.

use crate::utils::{QsError, QsResult};
use std::{
    fs::{self, File},
    path::Path,
};

pub const HAPLOTYPES_FILE: &str = "haplotypes.fa";
pub const HAPLOTYPES_CLEANED_FILE: &str = "haplotypes_cleaned.fa";
pub const READS_FILE: &str = "reads.fa";
pub const READS_CLEANED_FILE: &str = "reads_cleaned.fa";
pub const READS_CLUSTERED_FILE: &str = "reads_clustered.fa";

/// The open output files of one report, in fixed order.
#[derive(Debug)]
pub struct OutputSinks {
    pub haplotypes: File,
    pub haplotypes_cleaned: File,
    pub reads: File,
    pub reads_cleaned: File,
    pub reads_clustered: File,
}

impl OutputSinks {
    /// Creates `output_dir` if needed and opens every output file inside it.
    ///
    /// Files are opened in declaration order. If one of them fails the error
    /// names it, and the files opened before it are closed when dropped.
    pub fn create(output_dir: &Path) -> QsResult<OutputSinks> {
        fs::create_dir_all(output_dir).map_err(|e| QsError::ResourceCreation {
            path: output_dir.to_path_buf(),
            msg: e.to_string(),
        })?;

        let open = |name: &str| -> QsResult<File> {
            let path = output_dir.join(name);
            File::create(&path).map_err(|e| QsError::ResourceCreation {
                path,
                msg: e.to_string(),
            })
        };

        Ok(OutputSinks {
            haplotypes: open(HAPLOTYPES_FILE)?,
            haplotypes_cleaned: open(HAPLOTYPES_CLEANED_FILE)?,
            reads: open(READS_FILE)?,
            reads_cleaned: open(READS_CLEANED_FILE)?,
            reads_clustered: open(READS_CLUSTERED_FILE)?,
        })
    }
}
