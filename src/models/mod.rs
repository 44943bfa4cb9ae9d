// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::ServiceItem;
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
