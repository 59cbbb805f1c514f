//! Great-circle distance between geographic coordinates.

use crate::record::Coordinate;

/// Mean Earth radius in meters (6371.01 km).
pub const EARTH_RADIUS_M: f64 = 6_371_010.0;

/// Great-circle distance in meters between two coordinates (haversine).
///
/// Coordinates are not range checked. NaN or otherwise malformed input
/// yields a NaN distance instead of an error.
///
/// # Examples
///
/// ```
/// use altprofile::{distance, Coordinate};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((distance(a, b) - 111_195.10).abs() < 0.01);
/// assert_eq!(distance(a, a), 0.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h slightly above 1 for antipodal points.
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_zero_for_same_point() {
        let points = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(47.2692, 11.4041),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(90.0, 0.0),
        ];
        for p in points {
            assert_eq!(distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(51.5074, -0.1278);
        let b = Coordinate::new(48.8566, 2.3522);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_known_distances() {
        // One degree of longitude on the equator
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!(approx(d, 111_195.10, 0.01), "got {d}");

        // London to Paris, ~343.5 km
        let d = distance(
            Coordinate::new(51.5074, -0.1278),
            Coordinate::new(48.8566, 2.3522),
        );
        assert!(approx(d, 343_556.0, 500.0), "got {d}");

        // Half the circumference for antipodal points
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(approx(d, std::f64::consts::PI * EARTH_RADIUS_M, 1e-6), "got {d}");
    }

    #[test]
    fn test_radius_of_6371_01_km() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!(approx(d, 111_195.10, 0.01), "got {d}");
        assert!(approx(d, 111_195.101_177_483_93, 1e-6), "got {d}");

        // 6371 km would give 111.19492..., a visible drift in the fifth digit
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001));
        assert!(approx(d, 111.195_101, 1e-5), "got {d}");
        assert!(!approx(d, 111.194_926, 1e-5), "got {d}");
    }

    #[test]
    fn test_monotonic_in_separation() {
        let origin = Coordinate::new(10.0, 20.0);
        let mut last = 0.0;
        for step in 1..=80 {
            let d = distance(origin, Coordinate::new(10.0 + step as f64, 20.0));
            assert!(d > last);
            last = d;
        }
    }

    #[test]
    fn test_nan_propagates() {
        let d = distance(Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0));
        assert!(d.is_nan());

        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, f64::NAN));
        assert!(d.is_nan());
    }

    #[test]
    fn test_out_of_range_is_not_an_error() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(120.0, 400.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}
