use super::responses::LocationResponse;
use crate::errors::{ApiError, ErrorResponse};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};

/// Fetch a location by its exact name or by its slug.
#[utoipa::path(
    get,
    path = "/v1/locations/{name}",
    tag = "locations",
    params(("name" = String, Path, description = "Location name or slug")),
    responses(
        (status = 200, description = "The matching location", body = LocationResponse),
        (status = 404, description = "No location matches", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(err, skip(app), level = "info")]
async fn get_location(
    name: web::Path<String>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let location = app
        .get_client()
        .location_registry()
        .get(&name.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(LocationResponse::from(location)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{name}", web::get().to(get_location));
}
