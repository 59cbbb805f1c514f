//! Track points and profile records.
//!
//! Both types are plain values: a [`TrackPoint`] is produced by an input
//! reader and consumed once by the profile generator, a [`ProfileRecord`]
//! is produced by the generator and consumed once by an output sink.

use serde::{Deserialize, Serialize};

/// Column name for the track identifier.
pub const KEY_TRACK: &str = "Track";

/// Column name for the timestamp.
pub const KEY_TIME: &str = "Time";

/// Column name for the cumulative distance.
pub const KEY_DISTANCE: &str = "Distance";

/// Column name for the elevation.
pub const KEY_ELEVATION: &str = "Elevation";

/// Column name for the latitude.
pub const KEY_LATITUDE: &str = "Latitude";

/// Column name for the longitude.
pub const KEY_LONGITUDE: &str = "Longitude";

/// Header row of a tabular profile.
pub const PROFILE_HEADER: [&str; 4] = [KEY_TRACK, KEY_TIME, KEY_DISTANCE, KEY_ELEVATION];

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One point of a GPS trace.
///
/// `time` and `elevation` are opaque text and are never parsed by the
/// profile generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub track: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: String,
}

impl TrackPoint {
    pub fn new(
        track: impl Into<String>,
        time: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: impl Into<String>,
    ) -> Self {
        Self {
            track: track.into(),
            time: time.into(),
            latitude,
            longitude,
            elevation: elevation.into(),
        }
    }

    /// Returns the position of this point.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// One row of an altitude profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "Track")]
    pub track: String,
    #[serde(rename = "Time")]
    pub time: String,
    /// Meters travelled since the first point of `track`.
    #[serde(rename = "Distance")]
    pub distance: f64,
    #[serde(rename = "Elevation")]
    pub elevation: String,
}

impl ProfileRecord {
    /// Parses the elevation text as meters.
    ///
    /// Returns `None` for blank or non-numeric elevations.
    pub fn elevation_value(&self) -> Option<f64> {
        self.elevation.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_point_coordinate() {
        let point = TrackPoint::new("T1", "2024-05-01T10:00:00Z", 47.25, 11.4, "574");
        assert_eq!(point.coordinate(), Coordinate::new(47.25, 11.4));
        assert_eq!(point.elevation, "574");
    }

    #[test]
    fn test_elevation_value() {
        let mut record = ProfileRecord {
            track: "T1".to_string(),
            time: String::new(),
            distance: 0.0,
            elevation: " 1203.5 ".to_string(),
        };
        assert_eq!(record.elevation_value(), Some(1203.5));

        record.elevation = String::new();
        assert_eq!(record.elevation_value(), None);

        record.elevation = "void".to_string();
        assert_eq!(record.elevation_value(), None);
    }

    #[test]
    fn test_profile_header_order() {
        assert_eq!(PROFILE_HEADER, ["Track", "Time", "Distance", "Elevation"]);
    }
}
