mod error;
mod readers;
mod util;

pub use error::{QsError, QsResult};
pub use readers::{load_aligned_fasta, open_input_reader};
pub use util::{clean, handle_error_and_exit, is_wildcard, strip_gaps, Result};
