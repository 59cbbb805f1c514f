//! GPX track point reader.
//!
//! Each `<trk>` becomes one track, named after its `<name>` or, when it has
//! none, after its 1-based position in the file. Segments of a track are
//! concatenated. Route and waypoint elements are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ProfileError, Result};
use crate::record::TrackPoint;

/// Reads track points from GPX documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct GpxReader;

impl GpxReader {
    /// Reads all track points from the file at `path`.
    pub fn read(&self, path: &Path) -> Result<Vec<TrackPoint>> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Reads all track points from any GPX source.
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<TrackPoint>> {
        let document = ::gpx::read(source).map_err(|e| ProfileError::Gpx(e.to_string()))?;

        let mut points = Vec::new();
        for (index, track) in document.tracks.into_iter().enumerate() {
            let name = match track.name {
                Some(name) if !name.trim().is_empty() => name,
                _ => (index + 1).to_string(),
            };
            debug!(track = %name, segments = track.segments.len(), "reading track");

            for segment in track.segments {
                for waypoint in segment.points {
                    let time = match waypoint.time {
                        Some(time) => time.format().map_err(|e| ProfileError::Gpx(e.to_string()))?,
                        None => String::new(),
                    };
                    let elevation = waypoint.elevation.map(|e| e.to_string()).unwrap_or_default();
                    let position = waypoint.point();

                    points.push(TrackPoint {
                        track: name.clone(),
                        time,
                        latitude: position.y(),
                        longitude: position.x(),
                        elevation,
                    });
                }
            }
        }

        Ok(points)
    }
}
