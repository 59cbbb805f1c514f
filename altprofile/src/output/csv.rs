//! CSV profile writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::write_error;
use crate::error::Result;
use crate::record::{ProfileRecord, PROFILE_HEADER};

/// Writes a profile as CSV: a header row, then one row per record.
///
/// Distances use the shortest representation that reads back to the same
/// value, e.g. `0.0` or `111.19510117748393`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl CsvWriter {
    /// Writes `records` to the file at `path`.
    pub fn write(&self, records: &[ProfileRecord], path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| write_error(path, e))?;
        self.write_to(records, BufWriter::new(file))
            .map_err(|e| write_error(path, e))
    }

    /// Writes `records` to any destination.
    pub fn write_to<W: Write>(&self, records: &[ProfileRecord], destination: W) -> Result<()> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(destination);

        writer.write_record(PROFILE_HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}
