use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the Generative Language API
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Gemini API returned error: {0}")]
    ApiError(String),
}

/// Client for Google's Generative Language API (Gemini)
///
/// One `generateContent` call per match request, temperature pinned to 0
/// so identical requests produce identical rankings. The system instruction
/// rides the model's dedicated instruction channel rather than being
/// reissued inside the message body.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            client,
        }
    }

    /// Run a single deterministic generation and return the raw reply text.
    ///
    /// A reply without any candidate text maps to an empty string, not an
    /// error: downstream parsing treats it as "no matches", which is the
    /// contract for unusable model output.
    pub async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key),
        );

        let body = serde_json::json!({
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0.0 },
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Gemini call failed: {} - {}", status, detail);
            return Err(GeminiError::ApiError(format!(
                "Gemini request failed: {}",
                status
            )));
        }

        let json: Value = response.json().await?;
        Ok(candidate_text(&json))
    }
}

/// Concatenated text parts of the first candidate, empty when absent
fn candidate_text(json: &Value) -> String {
    json.get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}
