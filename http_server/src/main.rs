use crate::configuration::{Settings, StorageBackend};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::Context;
use mock_store::MemoryRepository;
use shared_kernel::tracing::{config_telemetry, shutdown_global_tracer_provider};
use sqlx_postgres::migrations::MigrationManager;
use sqlx_postgres::pool_manager::PoolManager;
use sqlx_postgres::repository::Repository;
use tracing_actix_web::TracingLogger;
use use_cases::AppImpl;

mod configuration;
mod errors;
mod routes;
mod use_case_app_container;

const SERVICE_NAME: &str = "location_registry";

async fn build_app(backend: StorageBackend) -> anyhow::Result<AppImpl> {
    match backend {
        StorageBackend::Postgres => {
            let settings = sqlx_postgres::configuration::Settings::parse()?;
            let pool_manager = PoolManager::new(&settings).await?;
            MigrationManager::new(&pool_manager).migrate().await?;
            Ok(AppImpl::new(Repository::new(&pool_manager)))
        }
        StorageBackend::Memory => Ok(AppImpl::new(MemoryRepository::new())),
    }
}

fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ])
        .allowed_header("X-CSRF-Token")
        .expose_headers(vec![header::LINK])
        .max_age(300);

    if allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }
    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config_telemetry(SERVICE_NAME)?;
    let settings = Settings::parse()?;
    let app = build_app(settings.storage.backend).await?;
    let app_container = web::Data::new(UseCaseAppContainer::new(app));
    let allowed_origins = settings.application.allowed_origins();
    let address = settings.application.address();

    tracing::info!(
        host = %address.0,
        port = address.1,
        backend = ?settings.storage.backend,
        "Starting server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .configure(routes::config)
            .app_data(app_container.clone())
    })
    .bind(address)?
    .run()
    .await
    .context("Server failed to run")?;

    shutdown_global_tracer_provider();
    Ok(())
}
