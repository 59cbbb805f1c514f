//! # altprofile - Altitude Profiles from GPS Traces
//!
//! Turns a sequence of GPS track points into an altitude profile: for every
//! point, the cumulative great-circle distance travelled since the start of
//! its track, paired with its elevation and timestamp.
//!
//! ## Features
//!
//! - **Streaming**: [`Profile`] is a lazy iterator adapter, [`generate`] collects
//! - **Per-track reset**: distance restarts at `0.0` whenever the track name changes
//! - **Inputs**: CSV track points, GPX (with the `gpx` feature)
//! - **Outputs**: CSV profile table, PNG line chart (with the `png` feature)
//!
//! ## Quick Start
//!
//! ```
//! use altprofile::{generate, TrackPoint};
//!
//! let points = vec![
//!     TrackPoint::new("T1", "t0", 0.0, 0.0, "10"),
//!     TrackPoint::new("T1", "t1", 0.0, 0.001, "12"),
//!     TrackPoint::new("T2", "t2", 5.0, 5.0, "100"),
//! ];
//!
//! let profile = generate(points);
//! assert_eq!(profile.len(), 3);
//! assert_eq!(profile[0].distance, 0.0);
//! assert!((profile[1].distance - 111.1951).abs() < 0.0001);
//! assert_eq!(profile[2].distance, 0.0);
//! ```
//!
//! ## End-to-end conversion
//!
//! ```ignore
//! use altprofile::{Conversion, InputFormat, OutputFormat};
//!
//! let summary = Conversion::builder("ride.gpx", InputFormat::Gpx, "ride.png", OutputFormat::Png)
//!     .output_options("--width 1200 --height 300")
//!     .build()
//!     .run()?;
//! println!("{} records in {} tracks", summary.records, summary.tracks);
//! ```

pub mod convert;
pub mod error;
pub mod geo;
pub mod input;
pub mod options;
pub mod output;
pub mod profile;
pub mod record;

// Re-export main types at crate root for convenience
pub use convert::{Conversion, ConversionBuilder, ConversionSummary};
pub use error::{ProfileError, Result};
pub use geo::{distance, EARTH_RADIUS_M};
pub use input::InputFormat;
pub use output::OutputFormat;
pub use profile::{generate, Profile, ProfileExt};
pub use record::{Coordinate, ProfileRecord, TrackPoint};
