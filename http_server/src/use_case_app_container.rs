use use_cases::{App, AppImpl};

/// Shared by every worker, so the in-memory backend is one store per process.
pub struct UseCaseAppContainer(Box<dyn App>);

impl UseCaseAppContainer {
    pub fn new(app: AppImpl) -> Self {
        Self(Box::new(app))
    }

    pub fn get_client(&self) -> &dyn App {
        self.0.as_ref()
    }
}
