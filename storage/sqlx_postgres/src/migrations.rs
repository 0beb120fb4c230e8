use crate::pool_manager::PoolManager;
use anyhow::Context;
use sqlx::postgres::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct MigrationManager {
    pg_pool: Arc<PgPool>,
}

impl MigrationManager {
    pub fn new(pool_manager: &PoolManager) -> Self {
        Self {
            pg_pool: Arc::clone(&pool_manager.pg_pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.pg_pool.as_ref()
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!()
            .run(self.pool())
            .await
            .context("Failed to run migration")
    }
}
