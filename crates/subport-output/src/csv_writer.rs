use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, warn};

use subport_model::{NormalizedRecord, target_headers};

use crate::error::{OutputError, Result};

/// Write the header and one row per record to `sink`. Returns the number of
/// data rows written.
///
/// The header comes from the record's serde field names; an empty run still
/// gets the header row.
pub fn write_normalized_to<W: Write>(sink: W, records: &[NormalizedRecord]) -> csv::Result<usize> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(sink);
    if records.is_empty() {
        writer.write_record(target_headers())?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// Write the import file at `path`, replacing any existing file.
///
/// On failure the partially written file is removed.
pub fn write_normalized_csv(path: &Path, records: &[NormalizedRecord]) -> Result<usize> {
    let file = File::create(path).map_err(|err| OutputError::io(path, err))?;
    match write_normalized_to(BufWriter::new(file), records) {
        Ok(rows) => {
            debug!(path = %path.display(), rows, "wrote import file");
            Ok(rows)
        }
        Err(err) => {
            if let Err(cleanup) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %cleanup, "failed to remove partial output");
            }
            Err(OutputError::csv(path, err))
        }
    }
}
