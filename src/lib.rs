//! uslugi-match - LLM-assisted service matching for the city services portal
//!
//! This library provides the matching flow behind the portal's services
//! directory: the server-side resolver that turns a free-text query and a
//! candidate list into a ranked id list via the Gemini API, and the
//! client-side query submitter that debounces input and merges AI results
//! with a local keyword fallback.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    build_user_prompt, extract_json_object, filter_services, resolve_match_ids, MatchBackend,
    QuerySubmitter, MATCH_THRESHOLD, SYSTEM_INSTRUCTION,
};
pub use crate::models::{MatchRequest, MatchResponse, ServiceItem};
