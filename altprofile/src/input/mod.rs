//! Readers that turn GPS trace files into [`TrackPoint`]s.
//!
//! Every reader normalizes its source to the same five fields (track,
//! time, latitude, longitude, elevation) and preserves the order of the
//! points in the file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{ProfileError, Result};
use crate::record::TrackPoint;

pub mod csv;
#[cfg(feature = "gpx")]
pub mod gpx;

pub use self::csv::{CsvOptions, CsvReader};
#[cfg(feature = "gpx")]
pub use self::gpx::GpxReader;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma separated track points with a header row.
    Csv,
    /// GPS Exchange Format.
    #[cfg(feature = "gpx")]
    Gpx,
}

impl InputFormat {
    /// All formats compiled into this build.
    pub const ALL: &'static [InputFormat] = &[
        InputFormat::Csv,
        #[cfg(feature = "gpx")]
        InputFormat::Gpx,
    ];

    #[cfg(feature = "gpx")]
    const EXPECTED: &'static str = "CSV, GPX";
    #[cfg(not(feature = "gpx"))]
    const EXPECTED: &'static str = "CSV";

    /// Canonical name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Csv => "CSV",
            #[cfg(feature = "gpx")]
            InputFormat::Gpx => "GPX",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        InputFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileError::UnknownFormat {
                kind: "input",
                name: s.to_string(),
                expected: InputFormat::EXPECTED,
            })
    }
}

/// An input format together with its parsed options.
#[derive(Debug, Clone)]
pub enum InputReader {
    Csv(CsvReader),
    #[cfg(feature = "gpx")]
    Gpx(GpxReader),
}

impl InputReader {
    /// Configures a reader for `format` from its option string.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidOptions`] if the options do not parse.
    pub fn configure(format: InputFormat, options: &str) -> Result<Self> {
        if !options.trim().is_empty() {
            info!("Input options: {}", options);
        }

        match format {
            InputFormat::Csv => Ok(InputReader::Csv(CsvReader::from_options(options)?)),
            #[cfg(feature = "gpx")]
            InputFormat::Gpx => {
                if !options.trim().is_empty() {
                    warn!("GPX input takes no options, ignoring: {}", options);
                }
                Ok(InputReader::Gpx(GpxReader))
            }
        }
    }

    /// The format this reader handles.
    pub fn format(&self) -> InputFormat {
        match self {
            InputReader::Csv(_) => InputFormat::Csv,
            #[cfg(feature = "gpx")]
            InputReader::Gpx(_) => InputFormat::Gpx,
        }
    }

    /// Reads all track points from `path`, in file order.
    pub fn read(&self, path: &Path) -> Result<Vec<TrackPoint>> {
        info!("Reading: {}", path.display());
        match self {
            InputReader::Csv(reader) => reader.read(path),
            #[cfg(feature = "gpx")]
            InputReader::Gpx(reader) => reader.read(path),
        }
    }
}
