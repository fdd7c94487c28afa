//! Error taxonomy for the generation pipeline.
//!
//! Every failure the orchestrator can surface is a variant here, and the
//! retry loop is a flat function of `(classification, attempt count)`:
//! [`GenerateError::is_retryable`] is the whole policy table.

use thiserror::Error;

use crate::contracts::ContractType;

/// Failure classifications for the contract generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// One or more required fields are absent from the field map.
    ///
    /// Lists every missing field, not just the first, so the caller can
    /// re-prompt for all of them in one pass.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The contract type string has no registered schema or template.
    #[error("unsupported contract type: {0}")]
    UnsupportedType(String),

    /// A template slot had no corresponding field value.
    ///
    /// Can only happen if the schema registry and the template store have
    /// drifted out of sync; a configuration defect, not a user error.
    #[error("template slot '{slot}' has no value for {contract_type}")]
    Render {
        /// Contract type whose template failed to render.
        contract_type: ContractType,
        /// Name of the unfilled slot.
        slot: String,
    },

    /// Provider rejected the request as malformed (HTTP 400).
    #[error("bad request: {0}")]
    InvalidRequest(String),

    /// Provider rejected the API key or its permissions (HTTP 401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The configured model does not exist at the provider (HTTP 404).
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Provider rate limit hit (HTTP 429); retried with backoff.
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    /// Transport failure or provider-side unavailability; retried with
    /// backoff.
    #[error("transient generation failure: {0}")]
    Transient(String),

    /// Any other non-success provider response.
    #[error("provider error (status {status}): {message}")]
    Provider {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider-supplied message, when available.
        message: String,
    },

    /// Successful response carrying no candidate text.
    ///
    /// Treated as a provider defect, not a transient fault.
    #[error("provider returned no generated text")]
    EmptyResponse,

    /// Draft forwarding to the storage backend failed; never retried.
    #[error("draft submission failed: {0}")]
    Submission(String),

    /// Invalid or missing orchestrator configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl GenerateError {
    /// Whether the retry loop may re-send the request after this failure.
    ///
    /// Only rate limiting and transient transport/provider faults qualify;
    /// everything else aborts on first occurrence.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerateError::RateLimited(_) | GenerateError::Transient(_)
        )
    }
}
