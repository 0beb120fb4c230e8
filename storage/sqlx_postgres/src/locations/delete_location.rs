use crate::repository::Repository;
use anyhow::Context;
use entities::locations::slugify;
use use_cases::locations::store::StoreError;

impl Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn delete_location(&self, key: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM location.locations WHERE name = $1 OR slug = $2")
            .bind(key)
            .bind(slugify(key))
            .execute(self.pool())
            .await
            .context("Failed to delete location")?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::locations::fixtures::new_location;
    use crate::repository::Repository;
    use use_cases::locations::store::{LocationStore, StoreError};

    #[tokio::test]
    #[ignore = "needs a PostGIS database"]
    async fn test_delete_by_slug_then_lookup_fails() {
        let repo = Repository::new_test_repo().await;
        repo.create(new_location("New York", 40.7128, -74.0060))
            .await
            .unwrap();

        repo.delete("new-york").await.unwrap();

        assert!(matches!(
            repo.get_by_name_or_slug("New York").await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            repo.delete("New York").await,
            Err(StoreError::NotFound)
        ));
    }
}
