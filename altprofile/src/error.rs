//! Error types for the altprofile library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading traces or writing profiles.
///
/// Profile generation itself never fails; every variant originates in an
/// input reader, an option string or an output sink.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// IO error when reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file does not exist.
    #[error("Input file does not exist: {path}")]
    InputNotFound { path: PathBuf },

    /// The input path points to a directory.
    #[error("Input file points to a directory: {path}")]
    InputIsDirectory { path: PathBuf },

    /// No input or output format is known under this name.
    #[error("Unknown {kind} format: {name} (expected one of: {expected})")]
    UnknownFormat {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },

    /// The option string for a format could not be parsed.
    #[error("Failed to parse options for {format}: {options}\n{message}")]
    InvalidOptions {
        format: String,
        options: String,
        message: String,
    },

    /// A required column is missing from a CSV trace.
    #[error("Missing column '{column}' in input")]
    MissingColumn { column: &'static str },

    /// A latitude or longitude could not be parsed.
    #[error("Invalid {field} '{value}' in row {row}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        row: u64,
    },

    /// The GPX document could not be parsed.
    #[error("Failed to parse GPX: {0}")]
    Gpx(String),

    /// An elevation value is not numeric where a number is required.
    #[error("Invalid elevation '{value}' for track '{track}' at {time}")]
    InvalidElevation {
        track: String,
        time: String,
        value: String,
    },

    /// The chart could not be drawn.
    #[error("Failed to render chart: {0}")]
    Render(String),

    /// Writing the output failed.
    #[error("Failed to write: {path}\n{message}")]
    Write { path: PathBuf, message: String },
}

/// Result type alias using [`ProfileError`].
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProfileError::InputNotFound {
            path: PathBuf::from("ride.gpx"),
        };
        assert!(err.to_string().contains("ride.gpx"));

        let err = ProfileError::UnknownFormat {
            kind: "output",
            name: "SVG".to_string(),
            expected: "CSV, PNG",
        };
        assert!(err.to_string().contains("SVG"));
        assert!(err.to_string().contains("CSV, PNG"));

        let err = ProfileError::InvalidCoordinate {
            field: "latitude",
            value: "north".to_string(),
            row: 7,
        };
        assert!(err.to_string().contains("north"));
        assert!(err.to_string().contains("7"));

        let err = ProfileError::Write {
            path: PathBuf::from("/nope/out.csv"),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().starts_with("Failed to write: /nope/out.csv"));

        let err = ProfileError::Render("plotting error: layout".to_string());
        assert_eq!(err.to_string(), "Failed to render chart: plotting error: layout");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<ProfileError>();
    }
}
