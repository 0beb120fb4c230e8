use super::health::{self, HealthResponse};
use super::locations::nearest_location::NearestLocationQuery;
use super::locations::register_location::RegisterLocationRequest;
use super::locations::responses::{
    LocationBody, LocationCreatedResponse, LocationListResponse, LocationResponse,
    MessageResponse, NearestLocationBody, NearestLocationResponse,
};
use super::locations::{
    delete_location, get_location, list_locations, nearest_location, register_location,
};
use crate::errors::ErrorResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Location registry", description = "Named points and nearest location lookup"),
    paths(
        health::health,
        register_location::register_location,
        list_locations::list_locations,
        nearest_location::nearest_location,
        get_location::get_location,
        delete_location::delete_location
    ),
    components(schemas(
        HealthResponse,
        RegisterLocationRequest,
        LocationBody,
        NearestLocationBody,
        LocationCreatedResponse,
        LocationResponse,
        LocationListResponse,
        NearestLocationResponse,
        MessageResponse,
        ErrorResponse
    )),
    tags(
        (name = "locations", description = "Register, look up and delete locations"),
        (name = "health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
