use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use subport_model::RawRecord;

use crate::error::{IngestError, Result};

/// A loaded export: header list plus one raw record per data row.
#[derive(Debug, Clone, Default)]
pub struct SubscriberTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl SubscriberTable {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

// Undecodable bytes are replaced rather than failing the whole file.
fn decode_cell(raw: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(raw)
}

fn record_from_row(headers: &[String], row: &ByteRecord) -> RawRecord {
    let pairs = headers.iter().enumerate().map(|(idx, header)| {
        let value = row.get(idx).map(decode_cell).unwrap_or_default();
        (header.clone(), value.into_owned())
    });
    RawRecord::from_pairs(pairs)
}

/// Read an export file from disk.
pub fn read_subscriber_table(path: &Path) -> Result<SubscriberTable> {
    let file = File::open(path).map_err(|source| IngestError::open(path, source))?;
    let table = read_subscriber_table_from_reader(file, path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded subscriber export"
    );
    Ok(table)
}

/// Read an export from any byte source; `path` is only used in errors.
///
/// Empty lines are not records. A row of empty cells (`,,`) is kept so that
/// it is counted as a row with a missing email.
pub fn read_subscriber_table_from_reader<R: Read>(
    source: R,
    path: &Path,
) -> Result<SubscriberTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|err| IngestError::csv(path, err))?
        .iter()
        .map(|cell| normalize_header(&decode_cell(cell)))
        .collect();
    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    loop {
        let more = reader
            .read_byte_record(&mut row)
            .map_err(|err| IngestError::csv(path, err))?;
        if !more {
            break;
        }
        records.push(record_from_row(&headers, &row));
    }
    Ok(SubscriberTable { headers, records })
}
