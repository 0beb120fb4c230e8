mod create_location;
mod delete_location;
mod get_location;
mod list_locations;
mod nearest_location;

use crate::repository::Repository;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::locations::{
    Coordinates, Location, LocationId, LocationName, LocationSlug, NearestLocation, NewLocation,
};
use use_cases::locations::store::{LocationStore, StoreError};
use uuid::Uuid;

const UNIQUE_VIOLATION: &str = "23505";

pub(crate) const LOCATION_COLUMNS: &str = "id, name, slug, latitude, longitude, created_at";

#[derive(sqlx::FromRow, Debug)]
pub(crate) struct DbLocation {
    id: Uuid,
    name: String,
    slug: String,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

impl TryFrom<DbLocation> for Location {
    type Error = anyhow::Error;

    fn try_from(row: DbLocation) -> Result<Self, Self::Error> {
        Ok(Location {
            id: LocationId::from(row.id),
            name: LocationName::try_from(row.name).map_err(|err| anyhow!(err))?,
            slug: LocationSlug::from_stored(row.slug),
            coordinates: Coordinates::new(row.latitude, row.longitude)?,
            created_at: row.created_at,
        })
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}

#[async_trait]
impl LocationStore for Repository {
    async fn create(&self, location: NewLocation) -> Result<Location, StoreError> {
        self.insert_location(location).await
    }

    async fn get_by_id(&self, id: LocationId) -> Result<Location, StoreError> {
        self.find_location_by_id(id).await
    }

    async fn get_by_name_or_slug(&self, key: &str) -> Result<Location, StoreError> {
        self.find_location_by_name_or_slug(key).await
    }

    async fn list(&self) -> Result<Vec<Location>, StoreError> {
        self.list_locations().await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.delete_location(key).await
    }

    async fn find_nearest(&self, coordinates: Coordinates) -> Result<NearestLocation, StoreError> {
        self.nearest_location(coordinates).await
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use entities::locations::{Coordinates, LocationName, NewLocation};

    pub fn new_location(name: &str, latitude: f64, longitude: f64) -> NewLocation {
        NewLocation {
            name: LocationName::try_from(name).unwrap(),
            coordinates: Coordinates::new(latitude, longitude).unwrap(),
        }
    }
}
