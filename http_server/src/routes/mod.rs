mod api_docs;
pub(crate) mod health;
pub mod locations;

use crate::errors::ApiError;
use actix_web::web;
use api_docs::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub fn config(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .service(
            web::scope("/v1")
                .configure(health::init_routes)
                .configure(locations::init_routes),
        )
        .service(SwaggerUi::new("/swagger/{_:.*}").url(OPENAPI_PATH, ApiDoc::openapi()));
}
