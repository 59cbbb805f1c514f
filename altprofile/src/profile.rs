//! Altitude profile generation.
//!
//! The generator walks the track points once, in input order, carrying the
//! running distance of the current track. A track boundary is any point
//! whose track differs from the one before it; the first point is always a
//! boundary unless its track is empty.

use tracing::debug;

use crate::geo::distance;
use crate::record::{Coordinate, ProfileRecord, TrackPoint};

/// Lazy profile over an iterator of [`TrackPoint`]s.
///
/// Yields one [`ProfileRecord`] per consumed point, except for a point that
/// continues a track with no known predecessor position.
#[derive(Debug, Clone)]
pub struct Profile<I> {
    points: I,
    previous_track: String,
    previous: Option<Coordinate>,
    running: f64,
}

impl<I> Profile<I>
where
    I: Iterator<Item = TrackPoint>,
{
    pub fn new(points: I) -> Self {
        Self {
            points,
            previous_track: String::new(),
            previous: None,
            running: 0.0,
        }
    }

    /// Distance accumulated so far on the current track, in meters.
    pub fn running_distance(&self) -> f64 {
        self.running
    }

    fn step(&mut self, point: TrackPoint) -> Option<ProfileRecord> {
        let current = point.coordinate();

        if point.track != self.previous_track {
            debug!(track = %point.track, "start of track");
            self.running = 0.0;
            self.previous = Some(current);
            self.previous_track.clone_from(&point.track);
            return Some(ProfileRecord {
                track: point.track,
                time: point.time,
                distance: 0.0,
                elevation: point.elevation,
            });
        }

        let previous = self.previous.replace(current)?;
        self.running += distance(previous, current);

        Some(ProfileRecord {
            track: point.track,
            time: point.time,
            distance: self.running,
            elevation: point.elevation,
        })
    }
}

impl<I> Iterator for Profile<I>
where
    I: Iterator<Item = TrackPoint>,
{
    type Item = ProfileRecord;

    fn next(&mut self) -> Option<ProfileRecord> {
        loop {
            let point = self.points.next()?;
            if let Some(record) = self.step(point) {
                return Some(record);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.points.size_hint().1)
    }
}

/// Adds [`profile`](ProfileExt::profile) to anything that yields track points.
pub trait ProfileExt: IntoIterator<Item = TrackPoint> + Sized {
    /// Turns the points into a lazy altitude profile.
    fn profile(self) -> Profile<Self::IntoIter> {
        Profile::new(self.into_iter())
    }
}

impl<T> ProfileExt for T where T: IntoIterator<Item = TrackPoint> {}

/// Generates the altitude profile for a sequence of track points.
///
/// # Examples
///
/// ```
/// use altprofile::{generate, TrackPoint};
///
/// let profile = generate(vec![TrackPoint::new("T1", "t0", 46.0, 7.0, "1500")]);
/// assert_eq!(profile.len(), 1);
/// assert_eq!(profile[0].distance, 0.0);
/// ```
pub fn generate<P>(points: P) -> Vec<ProfileRecord>
where
    P: IntoIterator<Item = TrackPoint>,
{
    points.profile().collect()
}
