//! Draft Submission Adapter
//!
//! Forwards a generated result to an external storage backend as an
//! unfinalized "draft" record. Submission is fire-once: any status other
//! than 201 Created, or a transport failure, surfaces as
//! [`GenerateError::Submission`] and is never retried here; the caller
//! decides whether to re-invoke.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};
use url::Url;

use crate::contracts::{BackendAck, DraftMetadata, GenerationResult};
use crate::error::GenerateError;

/// Draft record sent to the storage backend.
#[derive(Debug, Serialize)]
struct DraftPayload<'a> {
    contract: &'a str,
    metadata: &'a DraftMetadata,
    status: &'a str,
    version: &'a str,
}

/// Error body the backend attaches to failed writes.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: Option<BackendErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct BackendErrorDetail {
    message: Option<String>,
}

/// Trait for draft storage backends.
///
/// The orchestrator depends on this seam rather than a concrete client so
/// callers can stub submission in tests.
#[async_trait]
pub trait DraftSink: Send + Sync {
    /// Submit a generated result as a draft record.
    async fn submit(
        &self,
        result: &GenerationResult,
        backend_url: &Url,
    ) -> Result<BackendAck, GenerateError>;
}

/// HTTP client for the draft storage backend.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
}

impl BackendClient {
    /// Create a backend client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DraftSink for BackendClient {
    #[instrument(skip_all, fields(contract_type = %result.metadata.contract_type, url = %backend_url))]
    async fn submit(
        &self,
        result: &GenerationResult,
        backend_url: &Url,
    ) -> Result<BackendAck, GenerateError> {
        let payload = DraftPayload {
            contract: &result.contract,
            metadata: &result.metadata,
            status: "draft",
            version: "1.0",
        };

        let response = self
            .client
            .post(backend_url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerateError::Submission(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::CREATED {
            let data = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);

            info!("contract draft accepted by backend");

            Ok(BackendAck {
                success: true,
                message: "Contract draft successfully sent to backend".to_string(),
                data,
            })
        } else {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BackendErrorBody>(&raw)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("Backend request failed with status {status}"));

            warn!(status = status.as_u16(), %message, "draft submission rejected");

            Err(GenerateError::Submission(message))
        }
    }
}
