use serde::{Deserialize, Serialize};

/// Response for the match endpoint: matching service ids, best match first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub ids: Vec<u64>,
}

/// Error response
///
/// The body shape is fixed by the endpoint contract to a single string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
