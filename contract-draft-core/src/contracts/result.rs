//! Output envelope types: the generated contract with its provenance
//! metadata, and the acknowledgment returned by the draft backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{ContractType, GenerationConfig};

/// Provenance metadata attached to every generated contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftMetadata {
    /// Contract category the draft was generated for.
    pub contract_type: ContractType,

    /// UTC timestamp of generation.
    pub generated_at: DateTime<Utc>,

    /// Identifier of the model that produced the text.
    pub model: String,
}

/// Result envelope returned by [`generate_contract`].
///
/// Owned by the caller after return; the orchestrator keeps no reference
/// to it.
///
/// [`generate_contract`]: crate::ContractGenerator::generate_contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The generated contract text, verbatim from the first candidate.
    pub contract: String,

    /// Provenance metadata.
    pub metadata: DraftMetadata,

    /// Decoding configuration actually used for this generation.
    pub config: GenerationConfig,
}

/// Acknowledgment from the draft storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendAck {
    /// Always `true`; failures surface as errors instead.
    pub success: bool,

    /// Human-readable confirmation message.
    pub message: String,

    /// Backend-supplied acknowledgment body, if any.
    pub data: serde_json::Value,
}
