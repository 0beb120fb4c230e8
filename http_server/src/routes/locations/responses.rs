use chrono::{DateTime, Utc};
use entities::locations::{Location, NearestLocation};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema, Debug)]
pub struct LocationBody {
    id: Uuid,
    #[schema(example = "New York")]
    name: String,
    #[schema(example = "new-york")]
    slug: String,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

impl From<Location> for LocationBody {
    fn from(location: Location) -> Self {
        Self {
            id: location.id.inner(),
            name: location.name.to_string(),
            slug: location.slug.to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            created_at: location.created_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct NearestLocationBody {
    id: Uuid,
    #[schema(example = "New York")]
    name: String,
    #[schema(example = "new-york")]
    slug: String,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
    /// Two decimals, in meters below 1000 m and kilometers from there on.
    #[schema(example = "5.42 kilometers")]
    distance: String,
}

impl From<NearestLocation> for NearestLocationBody {
    fn from(nearest: NearestLocation) -> Self {
        let distance = nearest.distance.to_string();
        let location = LocationBody::from(nearest.location);
        Self {
            id: location.id,
            name: location.name,
            slug: location.slug,
            latitude: location.latitude,
            longitude: location.longitude,
            created_at: location.created_at,
            distance,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct LocationCreatedResponse {
    #[schema(example = "Location created successfully")]
    message: String,
    data: LocationBody,
}

impl From<Location> for LocationCreatedResponse {
    fn from(location: Location) -> Self {
        Self {
            message: "Location created successfully".to_string(),
            data: location.into(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct LocationResponse {
    data: LocationBody,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            data: location.into(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct LocationListResponse {
    data: Vec<LocationBody>,
}

impl From<Vec<Location>> for LocationListResponse {
    fn from(locations: Vec<Location>) -> Self {
        Self {
            data: locations.into_iter().map(LocationBody::from).collect(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct NearestLocationResponse {
    data: NearestLocationBody,
}

impl From<NearestLocation> for NearestLocationResponse {
    fn from(nearest: NearestLocation) -> Self {
        Self {
            data: nearest.into(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct MessageResponse {
    #[schema(example = "Deleted location successfully")]
    message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
