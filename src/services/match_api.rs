use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::core::submitter::{BackendError, MatchBackend};
use crate::models::{MatchRequest, MatchResponse, ServiceItem};

/// Errors that can occur when calling the portal match endpoint
#[derive(Debug, Error)]
pub enum MatchApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Match endpoint returned error: {0}")]
    ApiError(String),
}

/// Client for the portal's match endpoint, used by the query submitter.
///
/// Any failure here is non-fatal for the caller: the submitter maps errors
/// to "no AI ids" and keeps serving results from the substring fallback.
pub struct MatchApiClient {
    base_url: String,
    client: Client,
}

impl MatchApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    pub async fn match_services(
        &self,
        query: &str,
        services: &[ServiceItem],
    ) -> Result<Vec<u64>, MatchApiError> {
        let url = format!(
            "{}/api/uslugi-match",
            self.base_url.trim_end_matches('/')
        );

        let request = MatchRequest {
            query: query.to_string(),
            services: services.to_vec(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Match endpoint call failed: {} - {}", status, detail);
            return Err(MatchApiError::ApiError(format!(
                "Match request failed: {}",
                status
            )));
        }

        let parsed: MatchResponse = response.json().await?;
        Ok(parsed.ids)
    }
}

impl MatchBackend for MatchApiClient {
    fn match_ids<'a>(
        &'a self,
        query: &'a str,
        services: &'a [ServiceItem],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u64>, BackendError>> + Send + 'a>> {
        Box::pin(async move {
            self.match_services(query, services)
                .await
                .map_err(|e| -> BackendError { Box::new(e) })
        })
    }
}
