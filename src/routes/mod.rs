// Route exports
pub mod matches;

use actix_web::{error, web, HttpResponse};

use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(matches::configure);
}

/// Map malformed JSON bodies onto the endpoint's fixed 400 contract body
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing query or services".to_string(),
        }),
    )
    .into()
}
