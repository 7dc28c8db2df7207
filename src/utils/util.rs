pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

/// Gap and space placeholders carried by aligned sequences.
#[inline]
pub fn is_wildcard(base: u8) -> bool {
    base == b'-' || base == b' '
}

/// Removes alignment placeholders, keeping the raw symbols in order.
pub fn strip_gaps(seq: &str) -> String {
    seq.chars().filter(|&c| c != '-' && c != ' ').collect()
}

/// Ungapped, upper-cased sequence with every non-ACGT symbol masked as `N`.
pub fn clean(seq: &str) -> String {
    strip_gaps(seq)
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            b @ ('A' | 'C' | 'G' | 'T') => b,
            _ => 'N',
        })
        .collect()
}
