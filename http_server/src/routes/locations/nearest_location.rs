use super::responses::NearestLocationResponse;
use crate::errors::{ApiError, ErrorResponse};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

/// Raw query values. Unparsable numbers map to `Invalid latitude` or `Invalid longitude`.
#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct NearestLocationQuery {
    /// Latitude in degrees, -90 to 90.
    lat: Option<String>,
    /// Longitude in degrees, -180 to 180.
    lng: Option<String>,
}

fn parse_coordinate(value: Option<&str>, message: &str) -> Result<f64, ApiError> {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .ok_or_else(|| ApiError::BadRequest(message.to_owned()))
}

/// Find the registered location closest to a coordinate.
#[utoipa::path(
    get,
    path = "/v1/locations/nearest",
    tag = "locations",
    params(NearestLocationQuery),
    responses(
        (status = 200, description = "Closest location with its distance", body = NearestLocationResponse),
        (status = 400, description = "Unparsable or out of range coordinates", body = ErrorResponse),
        (status = 404, description = "Registry is empty", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(err, skip(app), level = "info")]
async fn nearest_location(
    query: web::Query<NearestLocationQuery>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let latitude = parse_coordinate(query.lat.as_deref(), "Invalid latitude")?;
    let longitude = parse_coordinate(query.lng.as_deref(), "Invalid longitude")?;

    let nearest = app
        .get_client()
        .location_registry()
        .find_nearest(latitude, longitude)
        .await?;

    Ok(HttpResponse::Ok().json(NearestLocationResponse::from(nearest)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/nearest", web::get().to(nearest_location));
}
