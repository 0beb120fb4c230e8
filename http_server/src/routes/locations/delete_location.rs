use super::responses::MessageResponse;
use crate::errors::{ApiError, ErrorResponse};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};

/// Remove a location, looked up by name or slug.
#[utoipa::path(
    delete,
    path = "/v1/locations/{name}",
    tag = "locations",
    params(("name" = String, Path, description = "Location name or slug")),
    responses(
        (status = 200, description = "Location deleted", body = MessageResponse),
        (status = 404, description = "No location matches", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(err, skip(app), level = "info")]
async fn delete_location(
    name: web::Path<String>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    app.get_client()
        .location_registry()
        .delete(&name.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted location successfully")))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{name}", web::delete().to(delete_location));
}
