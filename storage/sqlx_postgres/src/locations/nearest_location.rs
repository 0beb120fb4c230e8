use crate::repository::Repository;
use anyhow::Context;
use chrono::{DateTime, Utc};
use entities::locations::{Coordinates, Distance, Location, NearestLocation};
use use_cases::locations::store::StoreError;
use uuid::Uuid;

use super::DbLocation;

#[derive(sqlx::FromRow, Debug)]
struct DbNearestLocation {
    id: Uuid,
    name: String,
    slug: String,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
    distance: f64,
}

impl TryFrom<DbNearestLocation> for NearestLocation {
    type Error = anyhow::Error;

    fn try_from(row: DbNearestLocation) -> Result<Self, Self::Error> {
        let location = Location::try_from(DbLocation {
            id: row.id,
            name: row.name,
            slug: row.slug,
            latitude: row.latitude,
            longitude: row.longitude,
            created_at: row.created_at,
        })?;
        Ok(NearestLocation {
            location,
            distance: Distance::from_meters(row.distance),
        })
    }
}

impl Repository {
    /// KNN ordering over the geography index; the distance is the spheroid
    /// distance in meters.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn nearest_location(
        &self,
        coordinates: Coordinates,
    ) -> Result<NearestLocation, StoreError> {
        let row = sqlx::query_as::<_, DbNearestLocation>(
            "
            WITH origin AS (
                SELECT ST_SetSRID(ST_MakePoint($2, $1), 4326)::geography AS geog
            )
            SELECT l.id, l.name, l.slug, l.latitude, l.longitude, l.created_at,
                   ST_Distance(l.geog, origin.geog) AS distance
            FROM location.locations l, origin
            ORDER BY l.geog <-> origin.geog
            LIMIT 1
            ",
        )
        .bind(coordinates.latitude())
        .bind(coordinates.longitude())
        .fetch_optional(self.pool())
        .await
        .context("Failed to find nearest location")?
        .ok_or(StoreError::NotFound)?;

        Ok(NearestLocation::try_from(row)?)
    }
}
