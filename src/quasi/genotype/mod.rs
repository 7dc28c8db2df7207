mod haplotype;
mod seeds;

pub use haplotype::{load_haplotypes, Genotype};
pub use seeds::find_seeds;
