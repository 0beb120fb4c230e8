use crate::locations::registry::{LocationRegistryInteractor, LocationRegistryInteractorImpl};
use crate::locations::store::LocationStore;
use std::sync::Arc;

pub mod locations;

pub trait App: Send + Sync {
    fn location_registry(&self) -> &dyn LocationRegistryInteractor;
}

pub struct AppImpl {
    location_registry: Arc<dyn LocationRegistryInteractor>,
}

impl App for AppImpl {
    fn location_registry(&self) -> &dyn LocationRegistryInteractor {
        self.location_registry.as_ref()
    }
}

impl AppImpl {
    pub fn new<S: LocationStore + 'static>(store: S) -> Self {
        let location_registry = LocationRegistryInteractorImpl::new(Arc::new(store));

        Self {
            location_registry: Arc::new(location_registry),
        }
    }
}
