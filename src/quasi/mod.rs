pub mod genotype;
pub mod posteriors;
pub mod reads;
pub mod writers;
