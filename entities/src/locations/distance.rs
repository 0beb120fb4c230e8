use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

const METERS_PER_KILOMETER: f64 = 1000.0;

/// Renders a distance in meters for people: two decimal places, switching to
/// kilometers from 1000 meters upwards.
pub fn format_distance(meters: f64) -> String {
    if meters >= METERS_PER_KILOMETER {
        format!("{:.2} kilometers", meters / METERS_PER_KILOMETER)
    } else {
        format!("{meters:.2} meters")
    }
}

/// Surface distance in meters. Serializes as its human readable form, the
/// numeric value stays available through [`Distance::meters`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        Distance(meters)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_distance(self.0))
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_distance, Distance};
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0.00 meters")]
    #[case(12.346, "12.35 meters")]
    #[case(999.0, "999.00 meters")]
    #[case(1000.0, "1.00 kilometers")]
    #[case(5264.9, "5.26 kilometers")]
    #[case(3_935_746.0, "3935.75 kilometers")]
    fn test_format_distance(#[case] meters: f64, #[case] expected: &str) {
        assert_eq!(format_distance(meters), expected);
    }

    #[test]
    fn test_distance_serializes_formatted_but_keeps_raw_meters() {
        let distance = Distance::from_meters(5264.9);
        assert_eq!(
            serde_json::to_value(distance).unwrap(),
            serde_json::json!("5.26 kilometers")
        );
        assert_eq!(distance.meters(), 5264.9);
    }
}
