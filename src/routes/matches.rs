use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{build_user_prompt, resolve_match_ids, SYSTEM_INSTRUCTION};
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, MatchResponse};
use crate::services::GeminiClient;

const BAD_REQUEST_MESSAGE: &str = "Missing query or services";
const NO_API_KEY_MESSAGE: &str = "GEMINI_API_KEY is not configured on the server.";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// None when no API key is configured; match requests then fail with a
    /// misconfiguration error instead of crashing the process at startup.
    pub gemini: Option<Arc<GeminiClient>>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/uslugi-match", web::post().to(match_services));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.gemini.is_some() {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match services endpoint
///
/// POST /api/uslugi-match
///
/// Request body:
/// ```json
/// {
///   "query": "string",
///   "services": [{ "id": 1, "name": "...", "description": "...",
///                  "category": "...", "tags": ["..."] }]
/// }
/// ```
///
/// Returns `{ "ids": [number] }` ordered best match first. Unusable model
/// output degrades to an empty list; only provider failures and missing
/// configuration surface as 500.
async fn match_services(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();

    let Some(request) = MatchRequest::from_value(&body) else {
        tracing::info!(%request_id, "Rejected malformed match request");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: BAD_REQUEST_MESSAGE.to_string(),
        });
    };

    if let Err(errors) = request.validate() {
        tracing::info!(%request_id, %errors, "Validation failed for match request");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: BAD_REQUEST_MESSAGE.to_string(),
        });
    }

    let Some(gemini) = state.gemini.as_ref() else {
        tracing::error!(%request_id, "Match request received without a configured Gemini key");
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: NO_API_KEY_MESSAGE.to_string(),
        });
    };

    tracing::info!(
        %request_id,
        query_len = request.query.len(),
        candidates = request.services.len(),
        "Matching services"
    );

    let prompt = build_user_prompt(&request.query, &request.services);

    match gemini.generate(SYSTEM_INSTRUCTION, &prompt).await {
        Ok(raw) => {
            let ids = resolve_match_ids(&raw);
            tracing::info!(%request_id, matched = ids.len(), "Returning match ids");
            HttpResponse::Ok().json(MatchResponse { ids })
        }
        Err(e) => {
            tracing::error!(%request_id, error = %e, "Gemini call failed");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
