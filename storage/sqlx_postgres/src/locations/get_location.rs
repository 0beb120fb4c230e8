use super::{DbLocation, LOCATION_COLUMNS};
use crate::repository::Repository;
use anyhow::Context;
use entities::locations::{slugify, Location, LocationId};
use use_cases::locations::store::StoreError;

impl Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn find_location_by_id(&self, id: LocationId) -> Result<Location, StoreError> {
        let query = format!("SELECT {LOCATION_COLUMNS} FROM location.locations WHERE id = $1");
        let row = sqlx::query_as::<_, DbLocation>(&query)
            .bind(id.inner())
            .fetch_optional(self.pool())
            .await
            .context("Failed to fetch location by id")?
            .ok_or(StoreError::NotFound)?;
        Ok(Location::try_from(row)?)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn find_location_by_name_or_slug(
        &self,
        key: &str,
    ) -> Result<Location, StoreError> {
        let query = format!(
            "
            SELECT {LOCATION_COLUMNS} FROM location.locations
            WHERE name = $1 OR slug = $2
            LIMIT 1
            "
        );
        let row = sqlx::query_as::<_, DbLocation>(&query)
            .bind(key)
            .bind(slugify(key))
            .fetch_optional(self.pool())
            .await
            .context("Failed to fetch location by name or slug")?
            .ok_or(StoreError::NotFound)?;
        Ok(Location::try_from(row)?)
    }
}
