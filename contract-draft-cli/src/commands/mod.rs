//! Subcommand implementations.

pub mod generate;
pub mod send;
pub mod types;
