//! CSV serialization of the collected records.

use std::io;
use std::path::Path;

use placegrab_core::OutputRecord;

use crate::error::CollectError;

/// Writes the header row and one row per record to `writer`.
///
/// The header is written explicitly so an empty result set still produces a
/// well-formed file.
///
/// # Errors
///
/// Returns [`csv::Error`] if encoding or the underlying write fails.
pub fn write_records<W: io::Write>(
    writer: W,
    records: &[OutputRecord],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(OutputRecord::HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `records` to `path`, replacing any existing file, and returns the
/// number of data rows written.
///
/// # Errors
///
/// Returns [`CollectError::Write`] if the file cannot be created or written.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> Result<usize, CollectError> {
    let to_write_error = |source: csv::Error| CollectError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| to_write_error(e.into()))?;
    write_records(file, records).map_err(to_write_error)?;

    tracing::debug!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(records.len())
}
