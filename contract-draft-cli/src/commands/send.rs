//! `send` subcommand: forward a saved result envelope to the backend.

use anyhow::{Context, Result};
use contract_draft_core::{ContractGenerator, GenerationResult};

use crate::cli::SendArgs;

pub async fn execute(args: SendArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let result: GenerationResult = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a result envelope", args.input.display()))?;

    let generator = ContractGenerator::from_env()?;
    let ack = generator.send_contract_draft(&result, &args.backend_url).await?;

    println!("{}", ack.message);
    if !ack.data.is_null() {
        println!("{}", serde_json::to_string_pretty(&ack.data)?);
    }

    Ok(())
}
