use crate::utils::Result;
use bio::io::fasta;
use std::io::Write;

/// A header/sequence pair ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FastaRecord {
    pub header: String,
    pub seq: String,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            seq: seq.into(),
        }
    }
}

/// Writes `records` in order as `>header` / sequence line pairs.
///
/// Takes ownership of the sink: it is flushed after the last record and
/// dropped on every return path, including a failed write.
pub fn write_records<W, I>(sink: W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = FastaRecord>,
{
    let mut writer = fasta::Writer::new(sink);
    let mut count = 0;
    for record in records {
        writer
            .write(&record.header, None, record.seq.as_bytes())
            .map_err(|e| format!("Failed to write record {}: {}", record.header, e))?;
        count += 1;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to flush FASTA output: {}", e))?;
    Ok(count)
}
