mod coordinates;
mod distance;
mod slug;

pub use coordinates::{
    Coordinates, CoordinatesError, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};
pub use distance::{format_distance, Distance};
pub use slug::{slugify, LocationSlug};

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::{non_empty_string, uuid_key};

uuid_key!(LocationId);

non_empty_string!(LocationName);

/// What a caller supplies to register a location; the store derives the slug
/// and assigns `id` and `created_at`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLocation {
    pub name: LocationName,
    pub coordinates: Coordinates,
}

impl NewLocation {
    pub fn slug(&self) -> LocationSlug {
        LocationSlug::from(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: LocationName,
    pub slug: LocationSlug,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    /// True when `key` is this location's exact name, or slugifies to its
    /// stored slug.
    pub fn is_identified_by(&self, key: &str) -> bool {
        self.name == *key || self.slug == *slugify(key)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearestLocation {
    #[serde(flatten)]
    pub location: Location,
    pub distance: Distance,
}
