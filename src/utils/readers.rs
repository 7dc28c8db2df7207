use super::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::Path;

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

/// Opens a plain or gzip-compressed text input.
pub fn open_input_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path).map_err(|e| format!("File {}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Parses aligned FASTA into `(id, sequence)` pairs in file order.
///
/// Sequence lines keep every symbol up to the line terminator, so trailing
/// space placeholders survive. Multi-line sequences are concatenated and
/// empty lines are skipped.
pub fn aligned_fasta_from_reader<R: BufRead>(reader: R) -> Result<Vec<(String, String)>> {
    let mut records: Vec<(String, String)> = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().ok_or(format!(
                "Missing record identifier at line {}",
                line_number + 1
            ))?;
            records.push((id.to_string(), String::new()));
        } else if !line.is_empty() {
            let (_, seq) = records.last_mut().ok_or(format!(
                "Sequence before first header at line {}",
                line_number + 1
            ))?;
            seq.push_str(&line);
        }
    }
    Ok(records)
}

pub fn load_aligned_fasta(path: &Path) -> Result<Vec<(String, String)>> {
    let reader = open_input_reader(path)?;
    aligned_fasta_from_reader(reader).map_err(|e| format!("{}: {}", path.display(), e))
}
