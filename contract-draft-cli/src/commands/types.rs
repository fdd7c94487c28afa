//! `types` subcommand: list supported contract types and their schemas.

use anyhow::Result;
use contract_draft_core::{schema, ContractType};

pub fn execute() -> Result<()> {
    println!("Available contract types:\n");
    for ct in ContractType::ALL {
        println!("  {ct}");
        println!("    required fields: {}", schema::required_fields(ct).join(", "));
    }
    Ok(())
}
