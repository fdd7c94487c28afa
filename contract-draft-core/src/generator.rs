//! Contract Generation Orchestrator
//!
//! The caller-facing API: validate a field map, generate a contract draft
//! through the remote model, and optionally forward the result to a draft
//! storage backend. Validation and rendering abort before any remote call
//! is made; the orchestrator never partially succeeds.
//!
//! The orchestrator holds no cross-call mutable state, so one instance is
//! safe to invoke from any number of concurrent callers, and an in-flight
//! call can be cancelled by dropping its future.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use url::Url;

use crate::clients::{BackendClient, DraftSink, GeminiClient};
use crate::config::GeneratorConfig;
use crate::contracts::{
    BackendAck, ContractType, DraftMetadata, FieldMap, GenerationConfig, GenerationResult,
};
use crate::error::GenerateError;
use crate::{schema, templates};

/// Build the result envelope for a completed generation.
///
/// Pure construction; the only check is that `text` is non-empty, which
/// the generation client already screens as [`GenerateError::EmptyResponse`].
pub fn assemble(
    contract_type: ContractType,
    text: String,
    model: String,
    config: GenerationConfig,
    generated_at: DateTime<Utc>,
) -> Result<GenerationResult, GenerateError> {
    if text.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    Ok(GenerationResult {
        contract: text,
        metadata: DraftMetadata {
            contract_type,
            generated_at,
            model,
        },
        config,
    })
}

/// Orchestrates schema validation, prompt rendering, remote generation,
/// and draft submission.
#[derive(Clone)]
pub struct ContractGenerator {
    client: GeminiClient,
    backend: BackendClient,
    generation: GenerationConfig,
}

impl ContractGenerator {
    /// Create an orchestrator with the default (deterministic) decoding
    /// configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        Self::with_generation_config(config, GenerationConfig::default())
    }

    /// Create an orchestrator with an explicit decoding configuration.
    pub fn with_generation_config(
        config: GeneratorConfig,
        generation: GenerationConfig,
    ) -> Result<Self, GenerateError> {
        let backend = BackendClient::new(config.timeout)?;
        let client = GeminiClient::new(config)?;

        Ok(Self {
            client,
            backend,
            generation,
        })
    }

    /// Create an orchestrator from environment variables.
    ///
    /// Fails fast when `GOOGLE_API_KEY` is absent.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::new(GeneratorConfig::from_env()?)
    }

    /// Check that `fields` carries every required field for `contract_type`.
    ///
    /// Reports all missing fields at once so the caller can re-prompt in a
    /// single pass. No side effects.
    pub fn validate_form_data(
        &self,
        contract_type: ContractType,
        fields: &FieldMap,
    ) -> Result<(), GenerateError> {
        schema::validate(contract_type, fields)
    }

    /// Generate a contract draft for `contract_type` from `fields`.
    ///
    /// Validates, renders the prompt, submits it to the remote model with
    /// bounded retry, and assembles the result envelope with a UTC
    /// timestamp and the model identifier.
    #[instrument(skip(self, fields), fields(contract_type = %contract_type))]
    pub async fn generate_contract(
        &self,
        contract_type: ContractType,
        fields: &FieldMap,
    ) -> Result<GenerationResult, GenerateError> {
        schema::validate(contract_type, fields)?;
        let prompt = templates::render(contract_type, fields)?;
        debug!(prompt_chars = prompt.len(), "prompt rendered");

        let text = self.client.generate(&prompt, &self.generation).await?;
        info!(chars = text.len(), "contract draft generated");

        assemble(
            contract_type,
            text,
            self.client.model().to_string(),
            self.generation.clone(),
            Utc::now(),
        )
    }

    /// Forward a generated result to a storage backend as a draft record.
    ///
    /// Fire-once; failures surface as [`GenerateError::Submission`] and
    /// whether to re-invoke is the caller's decision.
    pub async fn send_contract_draft(
        &self,
        result: &GenerationResult,
        backend_url: &Url,
    ) -> Result<BackendAck, GenerateError> {
        self.backend.submit(result, backend_url).await
    }
}
