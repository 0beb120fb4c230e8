use super::{is_unique_violation, DbLocation, LOCATION_COLUMNS};
use crate::repository::Repository;
use anyhow::Context;
use entities::locations::{Location, NewLocation};
use use_cases::locations::store::StoreError;

impl Repository {
    /// Single statement insert. The unique indexes on `name` and `slug` decide
    /// conflicts, so concurrent registrations of one name yield one row.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn insert_location(
        &self,
        location: NewLocation,
    ) -> Result<Location, StoreError> {
        let slug = location.slug();
        let query = format!(
            "
            INSERT INTO location.locations (name, slug, latitude, longitude, geog)
            VALUES ($1, $2, $3, $4, ST_SetSRID(ST_MakePoint($4, $3), 4326)::geography)
            RETURNING {LOCATION_COLUMNS}
            "
        );
        let row = sqlx::query_as::<_, DbLocation>(&query)
            .bind(location.name.as_ref())
            .bind(slug.as_ref())
            .bind(location.coordinates.latitude())
            .bind(location.coordinates.longitude())
            .fetch_one(self.pool())
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    StoreError::Conflict
                } else {
                    StoreError::Internal(anyhow::Error::new(err).context("Failed to insert location"))
                }
            })?;

        Location::try_from(row)
            .context("Failed to read inserted location")
            .map_err(StoreError::Internal)
    }
}
