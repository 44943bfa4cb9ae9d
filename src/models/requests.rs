use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::ServiceItem;

/// Request to match services against a free-text query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    pub query: String,
    pub services: Vec<ServiceItem>,
}

impl MatchRequest {
    /// Shape-check a raw JSON body.
    ///
    /// The endpoint contract returns one fixed 400 body for every malformed
    /// request, so the handler extracts `serde_json::Value` and validates
    /// here instead of letting the typed extractor reject with its own
    /// error shape. `query` must be a string and `services` an array;
    /// the non-empty rule on `query` is left to `validate()`.
    pub fn from_value(body: &Value) -> Option<Self> {
        let query = body.get("query")?.as_str()?.to_string();
        let services = body.get("services")?.as_array()?.clone();
        let services = serde_json::from_value(Value::Array(services)).ok()?;

        Some(Self { query, services })
    }
}
