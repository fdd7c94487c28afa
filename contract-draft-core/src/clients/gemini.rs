//! Generation Client
//!
//! Issues the remote `generateContent` call, classifies transport and
//! provider failures into the [`GenerateError`] taxonomy, and retries the
//! two retryable classifications with exponential backoff. Each attempt
//! re-sends the identical rendered prompt; nothing persists between
//! attempts beyond the counter and the backoff delay.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::GeneratorConfig;
use crate::contracts::GenerationConfig;
use crate::error::GenerateError;

/// Request body for the provider's `generateContent` endpoint.
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Successful provider response: a list of generated-text candidates.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Error body the provider attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: Option<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: Option<String>,
    status: Option<String>,
}

/// HTTP client for the remote text-generation provider.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeneratorConfig,
    endpoint: Url,
}

impl GeminiClient {
    /// Create a client for the provider named in `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerateError::Configuration(e.to_string()))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.as_str().trim_end_matches('/'),
            config.model
        )
        .parse()
        .map_err(|e| GenerateError::Configuration(format!("model endpoint: {e}")))?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Model identifier this client generates with.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Submit `prompt` for generation and return the first candidate's text.
    ///
    /// Retries `Transient` and `RateLimited` failures up to the configured
    /// attempt ceiling, doubling the backoff delay from the floor to the
    /// cap. All other classifications abort on first occurrence; exhausting
    /// the ceiling surfaces the last retryable error.
    #[instrument(skip_all, fields(model = %self.config.model))]
    pub async fn generate(
        &self,
        prompt: &str,
        generation: &GenerationConfig,
    ) -> Result<String, GenerateError> {
        let mut delay = self.config.backoff_floor;
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.attempt(prompt, generation).await {
                Ok(text) => {
                    debug!(attempt, chars = text.len(), "generation succeeded");
                    return Ok(text);
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_attempts => {
                    warn!(
                        attempt,
                        max_attempts = self.config.max_attempts,
                        backoff_ms = delay.as_millis() as u64,
                        error = %err,
                        "retryable generation failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(self.config.backoff_cap);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One request/response cycle, classified but not retried.
    async fn attempt(
        &self,
        prompt: &str,
        generation: &GenerationConfig,
    ) -> Result<String, GenerateError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: generation,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(classify_response(status, &raw));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| GenerateError::Provider {
                status: status.as_u16(),
                message: format!("unparseable response body: {e}"),
            })?;

        extract_text(parsed)
    }
}

/// Classify a transport-level failure; connection, DNS, and timeout
/// failures are all transient.
fn classify_transport(err: reqwest::Error) -> GenerateError {
    GenerateError::Transient(err.to_string())
}

/// Classify a non-2xx provider response.
fn classify_response(status: StatusCode, raw_body: &str) -> GenerateError {
    let detail = serde_json::from_str::<ProviderErrorBody>(raw_body)
        .ok()
        .and_then(|b| b.error);
    let provider_status = detail.as_ref().and_then(|d| d.status.clone());
    let message = detail
        .and_then(|d| d.message)
        .unwrap_or_else(|| "Unknown error".to_string());

    match status.as_u16() {
        400 => GenerateError::InvalidRequest(message),
        401 | 403 => GenerateError::Auth(message),
        404 => GenerateError::ModelNotFound(message),
        429 => GenerateError::RateLimited(message),
        code if code >= 500 => GenerateError::Transient(message),
        _ if matches!(
            provider_status.as_deref(),
            Some("UNAVAILABLE") | Some("DEADLINE_EXCEEDED")
        ) =>
        {
            GenerateError::Transient(message)
        }
        code => GenerateError::Provider {
            status: code,
            message,
        },
    }
}

/// Pull the generated text out of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerateError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();

    if text.is_empty() {
        Err(GenerateError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        let body = r#"{"error":{"message":"broken prompt"}}"#;

        assert!(matches!(
            classify_response(StatusCode::BAD_REQUEST, body),
            GenerateError::InvalidRequest(m) if m == "broken prompt"
        ));
        assert!(matches!(
            classify_response(StatusCode::UNAUTHORIZED, body),
            GenerateError::Auth(_)
        ));
        assert!(matches!(
            classify_response(StatusCode::FORBIDDEN, body),
            GenerateError::Auth(_)
        ));
        assert!(matches!(
            classify_response(StatusCode::NOT_FOUND, body),
            GenerateError::ModelNotFound(_)
        ));
        assert!(matches!(
            classify_response(StatusCode::TOO_MANY_REQUESTS, body),
            GenerateError::RateLimited(_)
        ));
        assert!(matches!(
            classify_response(StatusCode::INTERNAL_SERVER_ERROR, body),
            GenerateError::Transient(_)
        ));
        assert!(matches!(
            classify_response(StatusCode::SERVICE_UNAVAILABLE, body),
            GenerateError::Transient(_)
        ));
        assert!(matches!(
            classify_response(StatusCode::IM_A_TEAPOT, body),
            GenerateError::Provider { status: 418, .. }
        ));
    }

    #[test]
    fn provider_status_unavailable_is_transient() {
        let body = r#"{"error":{"message":"try later","status":"UNAVAILABLE"}}"#;
        assert!(matches!(
            classify_response(StatusCode::CONFLICT, body),
            GenerateError::Transient(m) if m == "try later"
        ));
    }

    #[test]
    fn missing_error_body_falls_back_to_unknown() {
        assert!(matches!(
            classify_response(StatusCode::BAD_REQUEST, "not json"),
            GenerateError::InvalidRequest(m) if m == "Unknown error"
        ));
    }

    #[test]
    fn extract_text_empty_candidates_is_empty_response() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(matches!(
            extract_text(response),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn extract_text_blank_part_is_empty_response() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![CandidatePart { text: String::new() }],
                }),
            }],
        };
        assert!(matches!(
            extract_text(response),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn extract_text_first_candidate_wins() {
        let response = GenerateContentResponse {
            candidates: vec![
                Candidate {
                    content: Some(CandidateContent {
                        parts: vec![CandidatePart {
                            text: "first".to_string(),
                        }],
                    }),
                },
                Candidate {
                    content: Some(CandidateContent {
                        parts: vec![CandidatePart {
                            text: "second".to_string(),
                        }],
                    }),
                },
            ],
        };
        assert_eq!(extract_text(response).unwrap(), "first");
    }
}
