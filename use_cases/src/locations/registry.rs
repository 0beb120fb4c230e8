use crate::locations::store::{LocationStore, StoreError};
use async_trait::async_trait;
use entities::locations::{Coordinates, Location, LocationName, NearestLocation, NewLocation};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error")]
    Internal,
}

#[derive(Debug, Clone)]
pub struct LocationInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
pub trait LocationRegistryInteractor: Send + Sync {
    async fn register(&self, location: LocationInput) -> Result<Location, RegistryError>;

    async fn get(&self, name_or_slug: &str) -> Result<Location, RegistryError>;

    async fn list(&self) -> Result<Vec<Location>, RegistryError>;

    async fn delete(&self, name_or_slug: &str) -> Result<(), RegistryError>;

    async fn find_nearest(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NearestLocation, RegistryError>;
}

pub struct LocationRegistryInteractorImpl {
    store: Arc<dyn LocationStore>,
}

impl LocationRegistryInteractorImpl {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }
}

fn validate(location: LocationInput) -> Result<NewLocation, RegistryError> {
    let name = LocationName::try_from(location.name)
        .map_err(|_| RegistryError::Validation("location name cannot be empty".to_string()))?;
    let coordinates = coordinates(location.latitude, location.longitude)?;
    let location = NewLocation { name, coordinates };

    if location.slug().as_ref().is_empty() {
        return Err(RegistryError::Validation(
            "location name must contain at least one letter or digit".to_string(),
        ));
    }
    Ok(location)
}

fn coordinates(latitude: f64, longitude: f64) -> Result<Coordinates, RegistryError> {
    Coordinates::new(latitude, longitude).map_err(|err| RegistryError::Validation(err.to_string()))
}

/// Logs the full storage failure for operators and hands callers a bare
/// internal error.
fn internal(err: StoreError, message: &'static str) -> RegistryError {
    tracing::error!(error = ?err, "{message}");
    RegistryError::Internal
}

#[async_trait]
impl LocationRegistryInteractor for LocationRegistryInteractorImpl {
    #[tracing::instrument(skip(self), level = "info")]
    async fn register(&self, location: LocationInput) -> Result<Location, RegistryError> {
        let location = validate(location)?;

        match self.store.create(location).await {
            Ok(location) => Ok(location),
            Err(StoreError::Conflict) => Err(RegistryError::Conflict(
                "location already exists".to_string(),
            )),
            Err(err) => Err(internal(err, "Error creating location")),
        }
    }

    #[tracing::instrument(skip(self), level = "info")]
    async fn get(&self, name_or_slug: &str) -> Result<Location, RegistryError> {
        match self.store.get_by_name_or_slug(name_or_slug).await {
            Ok(location) => Ok(location),
            Err(err @ StoreError::NotFound) => Err(RegistryError::NotFound(err.to_string())),
            Err(err) => Err(internal(err, "Error getting location")),
        }
    }

    #[tracing::instrument(skip(self), level = "info")]
    async fn list(&self) -> Result<Vec<Location>, RegistryError> {
        self.store
            .list()
            .await
            .map_err(|err| internal(err, "Error listing locations"))
    }

    #[tracing::instrument(skip(self), level = "info")]
    async fn delete(&self, name_or_slug: &str) -> Result<(), RegistryError> {
        match self.store.delete(name_or_slug).await {
            Ok(()) => Ok(()),
            Err(err @ StoreError::NotFound) => Err(RegistryError::NotFound(err.to_string())),
            Err(err) => Err(internal(err, "Error deleting location")),
        }
    }

    #[tracing::instrument(skip(self), level = "info")]
    async fn find_nearest(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NearestLocation, RegistryError> {
        let coordinates = coordinates(latitude, longitude)?;

        match self.store.find_nearest(coordinates).await {
            Ok(nearest) => Ok(nearest),
            Err(StoreError::NotFound) => {
                Err(RegistryError::NotFound("no location found".to_string()))
            }
            Err(err) => Err(internal(err, "Error finding nearest location")),
        }
    }
}
