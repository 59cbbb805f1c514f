//! Sinks that write an altitude profile to a file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{ProfileError, Result};
use crate::record::ProfileRecord;

pub mod csv;
#[cfg(feature = "png")]
pub mod png;

pub use self::csv::CsvWriter;
#[cfg(feature = "png")]
pub use self::png::{ChartConfig, PngWriter, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Profile table with a `Track,Time,Distance,Elevation` header.
    Csv,
    /// Elevation over distance line chart.
    #[cfg(feature = "png")]
    Png,
}

impl OutputFormat {
    /// All formats compiled into this build.
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Csv,
        #[cfg(feature = "png")]
        OutputFormat::Png,
    ];

    #[cfg(feature = "png")]
    const EXPECTED: &'static str = "CSV, PNG";
    #[cfg(not(feature = "png"))]
    const EXPECTED: &'static str = "CSV";

    /// Canonical name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "CSV",
            #[cfg(feature = "png")]
            OutputFormat::Png => "PNG",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileError::UnknownFormat {
                kind: "output",
                name: s.to_string(),
                expected: OutputFormat::EXPECTED,
            })
    }
}

/// An output format together with its parsed options.
#[derive(Debug, Clone)]
pub enum OutputSink {
    Csv(CsvWriter),
    #[cfg(feature = "png")]
    Png(PngWriter),
}

impl OutputSink {
    /// Configures a sink for `format` from its option string.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidOptions`] if the options do not parse.
    pub fn configure(format: OutputFormat, options: &str) -> Result<Self> {
        if !options.trim().is_empty() {
            info!("Output options: {}", options);
        }

        match format {
            OutputFormat::Csv => {
                if !options.trim().is_empty() {
                    warn!("CSV output takes no options, ignoring: {}", options);
                }
                Ok(OutputSink::Csv(CsvWriter))
            }
            #[cfg(feature = "png")]
            OutputFormat::Png => Ok(OutputSink::Png(PngWriter::from_options(options)?)),
        }
    }

    /// The format this sink produces.
    pub fn format(&self) -> OutputFormat {
        match self {
            OutputSink::Csv(_) => OutputFormat::Csv,
            #[cfg(feature = "png")]
            OutputSink::Png(_) => OutputFormat::Png,
        }
    }

    /// Writes `records` to `path`, replacing any existing file.
    ///
    /// A failed write may leave a partial file behind.
    pub fn write(&self, records: &[ProfileRecord], path: &Path) -> Result<()> {
        info!("Writing: {}", path.display());
        match self {
            OutputSink::Csv(writer) => writer.write(records, path),
            #[cfg(feature = "png")]
            OutputSink::Png(writer) => writer.write(records, path),
        }
    }
}

/// Wraps an error raised while producing `path`.
pub(crate) fn write_error(path: &Path, err: impl fmt::Display) -> ProfileError {
    ProfileError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
