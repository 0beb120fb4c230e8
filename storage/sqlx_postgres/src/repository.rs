use crate::pool_manager::PoolManager;
use sqlx::postgres::PgPool;
use std::sync::Arc;

/// PostGIS backed [`use_cases::locations::store::LocationStore`].
#[derive(Clone)]
pub struct Repository {
    pg_pool: Arc<PgPool>,
}

impl Repository {
    pub fn new(pool_manager: &PoolManager) -> Self {
        Self {
            pg_pool: Arc::clone(&pool_manager.pg_pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.pg_pool.as_ref()
    }

    #[cfg(any(test, feature = "testing"))]
    pub async fn new_test_repo() -> Self {
        let pool_manager = PoolManager::new_test_pool()
            .await
            .expect("Failed to set up the test database");
        Self::new(&pool_manager)
    }
}
