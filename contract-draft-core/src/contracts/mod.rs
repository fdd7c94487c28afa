//! Contract Schemas
//!
//! Shared types for the generation pipeline: the contract-type enumeration,
//! caller-supplied field maps, decoding configuration, and the result
//! envelope returned to callers. These are the authoritative shapes for
//! everything that crosses the orchestrator boundary.

pub mod result;
pub mod types;

pub use result::*;
pub use types::*;
