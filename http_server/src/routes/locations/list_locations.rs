use super::responses::LocationListResponse;
use crate::errors::{ApiError, ErrorResponse};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};

/// List every location, newest first.
#[utoipa::path(
    get,
    path = "/v1/locations",
    tag = "locations",
    responses(
        (status = 200, description = "All registered locations", body = LocationListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(err, skip(app), level = "info")]
async fn list_locations(app: web::Data<UseCaseAppContainer>) -> Result<HttpResponse, ApiError> {
    let locations = app.get_client().location_registry().list().await?;

    Ok(HttpResponse::Ok().json(LocationListResponse::from(locations)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_locations));
}
