//! Remote service clients.
//!
//! One client per external collaborator: the text-generation provider
//! ([`gemini`]) and the draft storage backend ([`backend`]). Each performs
//! at most one outstanding request per invocation; only the generation
//! client retries.

pub mod backend;
pub mod gemini;

pub use backend::*;
pub use gemini::*;
