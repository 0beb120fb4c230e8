use super::{DbLocation, LOCATION_COLUMNS};
use crate::repository::Repository;
use anyhow::Context;
use entities::locations::Location;
use use_cases::locations::store::StoreError;

impl Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let query = format!(
            "SELECT {LOCATION_COLUMNS} FROM location.locations ORDER BY created_at DESC, id"
        );
        let rows = sqlx::query_as::<_, DbLocation>(&query)
            .fetch_all(self.pool())
            .await
            .context("Failed to list locations")?;

        let locations = rows
            .into_iter()
            .map(Location::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use crate::locations::fixtures::new_location;
    use crate::repository::Repository;
    use use_cases::locations::store::LocationStore;

    #[tokio::test]
    #[ignore = "needs a PostGIS database"]
    async fn test_list_is_empty_then_newest_first() {
        let repo = Repository::new_test_repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        repo.create(new_location("New York", 40.7128, -74.0060))
            .await
            .unwrap();
        repo.create(new_location("Los Angeles", 34.0522, -118.2437))
            .await
            .unwrap();

        let names = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|location| location.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Los Angeles", "New York"]);
    }
}
