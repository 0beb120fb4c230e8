use super::responses::LocationCreatedResponse;
use crate::errors::{ApiError, ErrorResponse};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use use_cases::locations::registry::LocationInput;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
pub struct RegisterLocationRequest {
    #[schema(example = "New York")]
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<RegisterLocationRequest> for LocationInput {
    fn from(value: RegisterLocationRequest) -> Self {
        LocationInput {
            name: value.name,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Register a named location.
#[utoipa::path(
    post,
    path = "/v1/locations",
    tag = "locations",
    request_body = RegisterLocationRequest,
    responses(
        (status = 201, description = "Location registered", body = LocationCreatedResponse),
        (status = 400, description = "Blank name or coordinates out of range", body = ErrorResponse),
        (status = 409, description = "Name or slug already registered", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(err, skip(app), level = "info")]
async fn register_location(
    data: web::Json<RegisterLocationRequest>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let location = app
        .get_client()
        .location_registry()
        .register(data.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(LocationCreatedResponse::from(location)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(register_location));
}

#[cfg(test)]
mod tests {
    use crate::routes::locations::fixtures::register_request;
    use crate::routes::{config, test_support::in_memory_app};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_register_returns_created_location() {
        let app = test::init_service(App::new().app_data(in_memory_app()).configure(config)).await;

        let resp =
            test::call_service(&app, register_request("New York", 40.7128, -74.006).to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Location created successfully"));
        assert_eq!(body["data"]["name"], json!("New York"));
        assert_eq!(body["data"]["slug"], json!("new-york"));
        assert_eq!(body["data"]["latitude"], json!(40.7128));
        assert_eq!(body["data"]["longitude"], json!(-74.006));
        assert!(body["data"]["id"].is_string());
        assert!(body["data"]["created_at"].is_string());
    }

    #[actix_web::test]
    async fn test_registered_name_is_echoed_verbatim() {
        let app = test::init_service(App::new().app_data(in_memory_app()).configure(config)).await;

        let resp =
            test::call_service(&app, register_request("  New York ", 40.7128, -74.006).to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], json!("  New York "));
        assert_eq!(body["data"]["slug"], json!("new-york"));

        let req = test::TestRequest::get()
            .uri("/v1/locations/new-york")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], json!("  New York "));
    }

    #[actix_web::test]
    async fn test_duplicate_registration_is_a_conflict() {
        let app = test::init_service(App::new().app_data(in_memory_app()).configure(config)).await;
        test::call_service(&app, register_request("New York", 40.7128, -74.006).to_request())
            .await;

        let resp =
            test::call_service(&app, register_request("new york", 1.0, 1.0).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "location already exists" }));
    }

    #[actix_web::test]
    async fn test_out_of_range_latitude_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(in_memory_app()).configure(config)).await;

        let resp =
            test::call_service(&app, register_request("Nowhere", 100.0, 0.0).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("latitude"));
    }

    #[actix_web::test]
    async fn test_malformed_body_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(in_memory_app()).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/v1/locations")
            .set_json(json!({ "name": "New York" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
