mod distance;
mod read;

pub use distance::hamming_distance;
pub use read::{load_reads, AlignedRead};
