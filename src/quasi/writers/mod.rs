mod fasta;
mod listings;
mod outputs;

pub use fasta::{write_records, FastaRecord};
pub use listings::{
    clustered_read_listing, expanded_read_listing, freq_listing, haplotype_listing,
    write_clustered_reads, write_expanded_reads, write_freq_listing, write_haplotypes,
    SeqTransform,
};
pub use outputs::{
    OutputSinks, HAPLOTYPES_CLEANED_FILE, HAPLOTYPES_FILE, READS_CLEANED_FILE,
    READS_CLUSTERED_FILE, READS_FILE,
};
