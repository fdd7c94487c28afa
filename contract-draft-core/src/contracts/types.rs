//! Core input types: contract-type enumeration, field maps, and the
//! decoding configuration sent with every generation request.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// User-supplied field values keyed by field name.
///
/// Owned by the caller; the orchestrator only ever borrows it.
pub type FieldMap = HashMap<String, String>;

/// Supported legal-document categories.
///
/// Shared by the schema registry and the template store; adding a variant
/// requires a required-field list and a prompt template for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    TenancyAgreement,
    EmploymentContract,
    Nda,
    ServiceAgreement,
    PartnershipAgreement,
    ConsultingAgreement,
    LoanAgreement,
    SoftwareLicense,
}

impl ContractType {
    /// All supported contract types, in menu order.
    pub const ALL: [ContractType; 8] = [
        ContractType::TenancyAgreement,
        ContractType::EmploymentContract,
        ContractType::Nda,
        ContractType::ServiceAgreement,
        ContractType::PartnershipAgreement,
        ContractType::ConsultingAgreement,
        ContractType::LoanAgreement,
        ContractType::SoftwareLicense,
    ];

    /// Stable wire identifier for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::TenancyAgreement => "tenancy_agreement",
            ContractType::EmploymentContract => "employment_contract",
            ContractType::Nda => "nda",
            ContractType::ServiceAgreement => "service_agreement",
            ContractType::PartnershipAgreement => "partnership_agreement",
            ContractType::ConsultingAgreement => "consulting_agreement",
            ContractType::LoanAgreement => "loan_agreement",
            ContractType::SoftwareLicense => "software_license",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| GenerateError::UnsupportedType(s.to_string()))
    }
}

/// Decoding configuration sent with every generation request.
///
/// Serializes to the provider's camelCase `generationConfig` object.
/// The default is deterministic decoding (temperature 0) to minimize
/// run-to-run drift in legal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature; 0.0 selects greedy decoding.
    pub temperature: f32,

    /// Nucleus-sampling mass; omitted from the request when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff; omitted from the request when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Maximum number of output tokens.
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            top_p: None,
            top_k: None,
            max_output_tokens: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_type_roundtrip() {
        for ct in ContractType::ALL {
            let parsed: ContractType = ct.as_str().parse().unwrap();
            assert_eq!(parsed, ct);
        }
    }

    #[test]
    fn contract_type_unknown_string() {
        let err = "purchase_order".parse::<ContractType>().unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedType(t) if t == "purchase_order"));
    }

    #[test]
    fn contract_type_serde_matches_as_str() {
        for ct in ContractType::ALL {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.as_str()));
        }
    }

    #[test]
    fn generation_config_serializes_camel_case() {
        let config = GenerationConfig::default();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["maxOutputTokens"], 2000);
        // Unset sampling parameters stay off the wire entirely.
        assert!(value.get("topP").is_none());
        assert!(value.get("topK").is_none());
    }

    #[test]
    fn generation_config_sampling_params_on_wire_when_set() {
        let config = GenerationConfig {
            temperature: 0.25,
            top_p: Some(0.5),
            top_k: Some(40),
            max_output_tokens: 1024,
        };
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["topP"], 0.5);
        assert_eq!(value["topK"], 40);
    }
}
