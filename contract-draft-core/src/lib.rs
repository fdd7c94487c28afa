//! Contract Draft Generation Orchestrator
//!
//! Generates legal-document drafts (tenancy, employment, NDA, service,
//! partnership, consulting, loan, and software-license agreements) by
//! filling contract-type-specific prompt templates with user-supplied
//! field values and submitting them to a remote text-generation model.
//!
//! The pipeline for one call is:
//!
//! 1. validate the field map against the type's required-field schema,
//! 2. render the prompt template with the raw field values,
//! 3. submit the prompt to the remote model, retrying transient faults and
//!    rate limits with exponential backoff,
//! 4. assemble the result envelope (generated text + provenance metadata).
//!
//! A generated result can optionally be forwarded to an external storage
//! backend as an unfinalized draft record.
//!
//! This crate transports prompts and results; it does not parse, verify,
//! or warrant the legal content of what the model produces.
//!
//! # Usage
//!
//! ```rust,ignore
//! use contract_draft_core::{ContractGenerator, ContractType, FieldMap};
//!
//! let generator = ContractGenerator::from_env()?;
//!
//! let mut fields = FieldMap::new();
//! fields.insert("disclosing_party".into(), "Acme".into());
//! fields.insert("receiving_party".into(), "Beta".into());
//! fields.insert("purpose".into(), "Evaluate partnership".into());
//! fields.insert("term".into(), "2 years".into());
//!
//! let result = generator.generate_contract(ContractType::Nda, &fields).await?;
//! println!("{}", result.contract);
//! ```
//!
//! # Modules
//!
//! - [`contracts`]: shared data model (types, result envelope)
//! - [`schema`]: per-type required-field registry and validation
//! - [`templates`]: prompt template store and renderer
//! - [`clients`]: remote generation and draft-backend clients
//! - [`generator`]: the caller-facing orchestrator

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clients;
pub mod config;
pub mod contracts;
pub mod error;
pub mod generator;
pub mod schema;
pub mod templates;

// Re-export commonly used types
pub use clients::{BackendClient, DraftSink, GeminiClient};
pub use config::{GeneratorConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use contracts::{
    BackendAck, ContractType, DraftMetadata, FieldMap, GenerationConfig, GenerationResult,
};
pub use error::GenerateError;
pub use generator::{assemble, ContractGenerator};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
