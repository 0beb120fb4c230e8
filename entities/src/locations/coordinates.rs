use serde::Serialize;
use thiserror::Error;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Mean radius of the earth (IUGG), in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesError {
    #[error("latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),
    #[error("longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),
}

/// A WGS-84 point whose latitude lies in [-90, 90] and longitude in [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        // NaN fails both range checks
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinatesError::InvalidLatitude(latitude));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinatesError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in meters, using the haversine formula
    /// on a spherical earth.
    pub fn great_circle_distance(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        // rounding can push `a` slightly above 1 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_METERS * c
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinates, CoordinatesError};
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    #[case(40.7128, -74.0060)]
    fn test_coordinates_within_range_are_accepted(#[case] latitude: f64, #[case] longitude: f64) {
        let coordinates = Coordinates::new(latitude, longitude).unwrap();
        assert_eq!(coordinates.latitude(), latitude);
        assert_eq!(coordinates.longitude(), longitude);
    }

    #[rstest]
    #[case(100.0, 0.0, CoordinatesError::InvalidLatitude(100.0))]
    #[case(-90.5, 0.0, CoordinatesError::InvalidLatitude(-90.5))]
    #[case(0.0, 180.1, CoordinatesError::InvalidLongitude(180.1))]
    #[case(0.0, -200.0, CoordinatesError::InvalidLongitude(-200.0))]
    fn test_coordinates_out_of_range_are_rejected(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: CoordinatesError,
    ) {
        assert_eq!(Coordinates::new(latitude, longitude), Err(expected));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
        assert!(Coordinates::new(f64::INFINITY, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_distance_to_itself_is_zero() {
        let nairobi = Coordinates::new(-1.2921, 36.8219).unwrap();
        assert_eq!(nairobi.great_circle_distance(&nairobi), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let new_york = Coordinates::new(40.7128, -74.0060).unwrap();
        let los_angeles = Coordinates::new(34.0522, -118.2437).unwrap();
        let there = new_york.great_circle_distance(&los_angeles);
        let back = los_angeles.great_circle_distance(&new_york);
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn test_new_york_to_los_angeles() {
        let new_york = Coordinates::new(40.7128, -74.0060).unwrap();
        let los_angeles = Coordinates::new(34.0522, -118.2437).unwrap();
        let distance = new_york.great_circle_distance(&los_angeles);
        // ~3936 km on a sphere
        assert!((distance - 3_936_000.0).abs() < 10_000.0, "got {distance}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let origin = Coordinates::new(0.0, 0.0).unwrap();
        let north = Coordinates::new(1.0, 0.0).unwrap();
        let distance = origin.great_circle_distance(&north);
        assert!((distance - 111_195.0).abs() < 10.0, "got {distance}");
    }

    #[test]
    fn test_antipodal_points() {
        let a = Coordinates::new(0.0, 0.0).unwrap();
        let b = Coordinates::new(0.0, 180.0).unwrap();
        let distance = a.great_circle_distance(&b);
        assert!((distance - std::f64::consts::PI * 6_371_008.8).abs() < 1.0);
    }
}
