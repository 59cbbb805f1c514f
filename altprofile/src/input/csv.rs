//! CSV track point reader.
//!
//! Expects a header row naming the columns `Track`, `Time`, `Latitude`,
//! `Longitude` and `Elevation`, in any order. Other columns are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ::csv::StringRecord;
use clap::Parser;

use crate::error::{ProfileError, Result};
use crate::options;
use crate::record::{TrackPoint, KEY_ELEVATION, KEY_LATITUDE, KEY_LONGITUDE, KEY_TIME, KEY_TRACK};

/// Options for the CSV input format.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "CSV", about = "Options for the CSV input format.")]
pub struct CsvOptions {
    /// The column separator
    #[arg(long, default_value_t = ',', value_name = "char")]
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Reads track points from CSV.
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    options: CsvOptions,
}

/// Column positions of the five track point fields.
struct Columns {
    track: usize,
    time: usize,
    latitude: usize,
    longitude: usize,
    elevation: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(ProfileError::MissingColumn { column })
        };

        Ok(Self {
            track: find(KEY_TRACK)?,
            time: find(KEY_TIME)?,
            latitude: find(KEY_LATITUDE)?,
            longitude: find(KEY_LONGITUDE)?,
            elevation: find(KEY_ELEVATION)?,
        })
    }
}

impl CsvReader {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Builds a reader from an option string such as `--delimiter ;`.
    pub fn from_options(options: &str) -> Result<Self> {
        let parsed: CsvOptions = options::parse("CSV", options)?;
        if !parsed.delimiter.is_ascii() {
            return Err(ProfileError::InvalidOptions {
                format: "CSV".to_string(),
                options: options.to_string(),
                message: format!("delimiter must be a single ASCII character, got '{}'", parsed.delimiter),
            });
        }
        Ok(Self::new(parsed))
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Reads all points from the file at `path`.
    pub fn read(&self, path: &Path) -> Result<Vec<TrackPoint>> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Reads all points from any CSV source.
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<TrackPoint>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter as u8)
            .from_reader(source);

        let columns = Columns::locate(reader.headers()?)?;

        let mut points = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);

            points.push(TrackPoint {
                track: field(&record, columns.track, KEY_TRACK)?.to_string(),
                time: field(&record, columns.time, KEY_TIME)?.to_string(),
                latitude: coordinate(&record, columns.latitude, KEY_LATITUDE, row)?,
                longitude: coordinate(&record, columns.longitude, KEY_LONGITUDE, row)?,
                elevation: field(&record, columns.elevation, KEY_ELEVATION)?.to_string(),
            });
        }

        Ok(points)
    }
}

fn field<'r>(record: &'r StringRecord, idx: usize, column: &'static str) -> Result<&'r str> {
    record.get(idx).ok_or(ProfileError::MissingColumn { column })
}

fn coordinate(record: &StringRecord, idx: usize, column: &'static str, row: u64) -> Result<f64> {
    let value = field(record, idx, column)?;
    value
        .trim()
        .parse()
        .map_err(|_| ProfileError::InvalidCoordinate {
            field: column,
            value: value.to_string(),
            row,
        })
}
