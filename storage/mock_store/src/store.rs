use async_trait::async_trait;
use chrono::Utc;
use entities::locations::{
    Coordinates, Distance, Location, LocationId, NearestLocation, NewLocation,
};
use tokio::sync::RwLock;
use use_cases::locations::store::{LocationStore, StoreError};

/// Rows are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    locations: RwLock<Vec<Location>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationStore for MemoryRepository {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn create(&self, location: NewLocation) -> Result<Location, StoreError> {
        let slug = location.slug();
        // the write guard spans check and insert
        let mut locations = self.locations.write().await;
        if locations
            .iter()
            .any(|stored| stored.name == location.name || stored.slug == slug)
        {
            return Err(StoreError::Conflict);
        }

        let created = Location {
            id: LocationId::new(),
            name: location.name,
            slug,
            coordinates: location.coordinates,
            created_at: Utc::now(),
        };
        locations.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: LocationId) -> Result<Location, StoreError> {
        self.locations
            .read()
            .await
            .iter()
            .find(|location| location.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_name_or_slug(&self, key: &str) -> Result<Location, StoreError> {
        self.locations
            .read()
            .await
            .iter()
            .find(|location| location.is_identified_by(key))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Location>, StoreError> {
        Ok(self.locations.read().await.iter().rev().cloned().collect())
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut locations = self.locations.write().await;
        let before = locations.len();
        locations.retain(|location| !location.is_identified_by(key));
        if locations.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn find_nearest(&self, coordinates: Coordinates) -> Result<NearestLocation, StoreError> {
        self.locations
            .read()
            .await
            .iter()
            .map(|location| {
                let meters = location.coordinates.great_circle_distance(&coordinates);
                (location, meters)
            })
            .min_by(|(_, left), (_, right)| left.total_cmp(right))
            .map(|(location, meters)| NearestLocation {
                location: location.clone(),
                distance: Distance::from_meters(meters),
            })
            .ok_or(StoreError::NotFound)
    }
}
