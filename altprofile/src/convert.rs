//! End-to-end conversion from a GPS trace file to a profile file.
//!
//! ```ignore
//! use altprofile::{Conversion, InputFormat, OutputFormat};
//!
//! let summary = Conversion::builder("trace.csv", InputFormat::Csv, "profile.csv", OutputFormat::Csv)
//!     .input_options("--delimiter ;")
//!     .build()
//!     .run()?;
//! assert_eq!(summary.points, summary.records);
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ProfileError, Result};
use crate::input::{InputFormat, InputReader};
use crate::output::{OutputFormat, OutputSink};
use crate::profile::generate;
use crate::record::TrackPoint;

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Track points read from the input.
    pub points: usize,
    /// Profile records written to the output.
    pub records: usize,
    /// Number of track boundaries encountered.
    pub tracks: usize,
}

/// A configured conversion from one file to another.
#[derive(Debug, Clone)]
pub struct Conversion {
    input: PathBuf,
    input_format: InputFormat,
    input_options: String,
    output: PathBuf,
    output_format: OutputFormat,
    output_options: String,
}

impl Conversion {
    /// Create a builder for a conversion with default (empty) options.
    pub fn builder<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        input_format: InputFormat,
        output: Q,
        output_format: OutputFormat,
    ) -> ConversionBuilder {
        ConversionBuilder::new(input, input_format, output, output_format)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Reads the input, generates the profile and writes the output.
    ///
    /// Nothing is read before both formats are configured, so option
    /// errors never leave an output file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file does not exist or is a directory
    /// - An option string is invalid
    /// - The input cannot be read or parsed
    /// - The output cannot be written
    pub fn run(&self) -> Result<ConversionSummary> {
        if !self.input.exists() {
            return Err(ProfileError::InputNotFound {
                path: self.input.clone(),
            });
        }
        if self.input.is_dir() {
            return Err(ProfileError::InputIsDirectory {
                path: self.input.clone(),
            });
        }

        info!("Input format: {}", self.input_format);
        let reader = InputReader::configure(self.input_format, &self.input_options)?;
        info!("Output format: {}", self.output_format);
        let sink = OutputSink::configure(self.output_format, &self.output_options)?;

        let points = reader.read(&self.input)?;
        let summary_points = points.len();
        let tracks = count_tracks(&points);

        let records = generate(points);
        sink.write(&records, &self.output)?;

        let summary = ConversionSummary {
            points: summary_points,
            records: records.len(),
            tracks,
        };
        info!(
            points = summary.points,
            records = summary.records,
            tracks = summary.tracks,
            "Successfully converted!"
        );

        Ok(summary)
    }
}

/// Number of points whose track differs from the one before.
fn count_tracks(points: &[TrackPoint]) -> usize {
    let mut previous = "";
    let mut tracks = 0;
    for point in points {
        if point.track != previous {
            tracks += 1;
            previous = point.track.as_str();
        }
    }
    tracks
}

/// Builder for [`Conversion`].
#[derive(Debug, Clone)]
pub struct ConversionBuilder {
    conversion: Conversion,
}

impl ConversionBuilder {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        input_format: InputFormat,
        output: Q,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            conversion: Conversion {
                input: input.as_ref().to_path_buf(),
                input_format,
                input_options: String::new(),
                output: output.as_ref().to_path_buf(),
                output_format,
                output_options: String::new(),
            },
        }
    }

    /// Set the option string for the input format.
    pub fn input_options(mut self, options: impl Into<String>) -> Self {
        self.conversion.input_options = options.into();
        self
    }

    /// Set the option string for the output format.
    pub fn output_options(mut self, options: impl Into<String>) -> Self {
        self.conversion.output_options = options.into();
        self
    }

    pub fn build(self) -> Conversion {
        self.conversion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TRACE: &str = "\
Track,Time,Latitude,Longitude,Elevation
T1,t0,0,0,10
T1,t1,0,0.001,12
T2,t2,5,5,100
";

    fn write_trace(dir: &Path) -> PathBuf {
        let path = dir.join("trace.csv");
        fs::write(&path, TRACE).unwrap();
        path
    }

    #[test]
    fn test_count_tracks() {
        let points = vec![
            TrackPoint::new("A", "", 0.0, 0.0, ""),
            TrackPoint::new("A", "", 0.0, 0.0, ""),
            TrackPoint::new("B", "", 0.0, 0.0, ""),
            TrackPoint::new("A", "", 0.0, 0.0, ""),
        ];
        assert_eq!(count_tracks(&points), 3);
        assert_eq!(count_tracks(&[]), 0);
    }

    #[test]
    fn test_run_csv_to_csv() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_trace(temp_dir.path());
        let output = temp_dir.path().join("profile.csv");

        let summary = Conversion::builder(&input, InputFormat::Csv, &output, OutputFormat::Csv)
            .build()
            .run()
            .unwrap();

        assert_eq!(
            summary,
            ConversionSummary {
                points: 3,
                records: 3,
                tracks: 2
            }
        );

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Track,Time,Distance,Elevation");
        assert_eq!(lines[1], "T1,t0,0.0,10");
        assert!(lines[2].starts_with("T1,t1,111.1951"));
        assert_eq!(lines[3], "T2,t2,0.0,100");
    }

    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let conversion = Conversion::builder(
            temp_dir.path().join("nope.csv"),
            InputFormat::Csv,
            temp_dir.path().join("out.csv"),
            OutputFormat::Csv,
        )
        .build();

        assert!(matches!(
            conversion.run(),
            Err(ProfileError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_input_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let conversion = Conversion::builder(
            temp_dir.path(),
            InputFormat::Csv,
            temp_dir.path().join("out.csv"),
            OutputFormat::Csv,
        )
        .build();

        assert!(matches!(
            conversion.run(),
            Err(ProfileError::InputIsDirectory { .. })
        ));
    }

    #[test]
    fn test_bad_options_leave_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_trace(temp_dir.path());
        let output = temp_dir.path().join("out.csv");

        let result = Conversion::builder(&input, InputFormat::Csv, &output, OutputFormat::Csv)
            .input_options("--separator ;")
            .build()
            .run();

        assert!(matches!(result, Err(ProfileError::InvalidOptions { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_builder_accessors() {
        let conversion =
            Conversion::builder("in.gpx", InputFormat::Csv, "out.csv", OutputFormat::Csv)
                .input_options("--delimiter ;")
                .output_options("")
                .build();
        assert_eq!(conversion.input(), Path::new("in.gpx"));
        assert_eq!(conversion.output(), Path::new("out.csv"));
    }
}
