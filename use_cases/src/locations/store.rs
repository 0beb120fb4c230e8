use async_trait::async_trait;
use entities::locations::{Coordinates, Location, LocationId, NearestLocation, NewLocation};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A location with the same name or slug is already stored.
    #[error("location already exists")]
    Conflict,
    #[error("location not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Persistence and spatial lookups for locations.
///
/// Implementations must make `create` atomic: the uniqueness of both the name
/// and the slug is decided by the storage engine at insertion time, so two
/// concurrent registrations of the same name produce one row and one
/// [`StoreError::Conflict`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn create(&self, location: NewLocation) -> Result<Location, StoreError>;

    async fn get_by_id(&self, id: LocationId) -> Result<Location, StoreError>;

    /// Matches `key` against the stored name, or `slugify(key)` against the
    /// stored slug.
    async fn get_by_name_or_slug(&self, key: &str) -> Result<Location, StoreError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<Location>, StoreError>;

    /// Resolves `key` like [`LocationStore::get_by_name_or_slug`] and removes
    /// the row. Returns [`StoreError::NotFound`] when nothing matched.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// The stored location with the smallest surface distance to
    /// `coordinates`. Equidistant candidates are returned in engine order.
    async fn find_nearest(&self, coordinates: Coordinates) -> Result<NearestLocation, StoreError>;
}
