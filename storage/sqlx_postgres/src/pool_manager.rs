use crate::configuration::Settings;
use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

/// Owns the process-wide connection pool. Built once at startup and handed
/// to whatever needs a connection.
#[derive(Clone)]
pub struct PoolManager {
    pub(crate) pg_pool: Arc<PgPool>,
}

impl PoolManager {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections())
            .connect_with(settings.with_db())
            .await
            .context("Failed to connect to DB")?;
        Ok(Self {
            pg_pool: Arc::new(pool),
        })
    }

    pub fn pool(&self) -> &PgPool {
        self.pg_pool.as_ref()
    }

    /// Creates a throwaway database named after a fresh uuid and migrates it.
    #[cfg(any(test, feature = "testing"))]
    pub async fn new_test_pool() -> anyhow::Result<Self> {
        use crate::migrations::MigrationManager;
        use sqlx::{Connection, Executor, PgConnection};

        let settings = Settings::parse()?;
        let (options, _) = settings.without_db();
        let mut connection = PgConnection::connect_with(&options)
            .await
            .context("Failed to connect to Postgres")?;
        let db_name = uuid::Uuid::new_v4().to_string();
        connection
            .execute(format!(r#"CREATE DATABASE "{db_name}";"#).as_str())
            .await
            .context("Failed to create database")?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections())
            .connect_with(options.database(&db_name))
            .await
            .context("Failed to connect to the test database")?;
        let manager = Self {
            pg_pool: Arc::new(pool),
        };
        MigrationManager::new(&manager).migrate().await?;
        Ok(manager)
    }
}
