// Service exports
pub mod gemini;
pub mod match_api;

pub use gemini::{GeminiClient, GeminiError};
pub use match_api::{MatchApiClient, MatchApiError};
