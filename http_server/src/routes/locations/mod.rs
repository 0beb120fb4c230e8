use actix_web::web;

pub(crate) mod delete_location;
pub(crate) mod get_location;
pub(crate) mod list_locations;
pub(crate) mod nearest_location;
pub(crate) mod register_location;
pub(crate) mod responses;

/// Routes match in registration order, so `/nearest` goes ahead of `/{name}`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/locations")
            .configure(register_location::init_routes)
            .configure(list_locations::init_routes)
            .configure(nearest_location::init_routes)
            .configure(get_location::init_routes)
            .configure(delete_location::init_routes),
    );
}

#[cfg(test)]
pub(crate) mod fixtures {
    use actix_web::test;
    use serde_json::json;

    pub fn register_request(name: &str, latitude: f64, longitude: f64) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/v1/locations")
            .set_json(json!({ "name": name, "latitude": latitude, "longitude": longitude }))
    }
}
