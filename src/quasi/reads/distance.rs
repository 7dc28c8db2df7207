use crate::utils::{is_wildcard, QsError, QsResult};

/// Number of mismatching positions between two aligned sequences.
///
/// Positions where either side holds a gap (`-`) or a space are skipped.
/// Sequences must have the same length.
pub fn hamming_distance(s: &str, t: &str) -> QsResult<usize> {
    if s.len() != t.len() {
        return Err(QsError::InvalidInput(format!(
            "Hamming distance requires sequences of equal length, got {} and {}",
            s.len(),
            t.len()
        )));
    }

    let dist = s
        .bytes()
        .zip(t.bytes())
        .filter(|&(a, b)| !is_wildcard(a) && !is_wildcard(b) && a != b)
        .count();
    Ok(dist)
}
