// Core matching logic exports
pub mod extract;
pub mod prompt;
pub mod resolver;
pub mod search;
pub mod submitter;

pub use extract::extract_json_object;
pub use prompt::{build_user_prompt, SYSTEM_INSTRUCTION};
pub use resolver::{resolve_match_ids, MATCH_THRESHOLD};
pub use search::{filter_services, is_vehicle_query, query_tokens};
pub use submitter::{MatchBackend, QuerySubmitter, DEBOUNCE};
