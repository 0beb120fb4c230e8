use sqlx_postgres::configuration::Settings;
use sqlx_postgres::migrations::MigrationManager;
use sqlx_postgres::pool_manager::PoolManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse()?;
    let pool_manager = PoolManager::new(&settings).await?;
    MigrationManager::new(&pool_manager).migrate().await
}
