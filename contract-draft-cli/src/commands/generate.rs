//! `generate` subcommand: validate fields, generate a draft, print the
//! transcript, and optionally save or forward the result envelope.

use anyhow::{Context, Result};
use contract_draft_core::{ContractGenerator, ContractType, FieldMap};

use crate::cli::GenerateArgs;

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let contract_type: ContractType = args.contract_type.parse()?;
    let fields = load_fields(&args)?;

    let generator = ContractGenerator::from_env()?;
    generator.validate_form_data(contract_type, &fields)?;

    println!("Generating contract...");
    let result = generator.generate_contract(contract_type, &fields).await?;

    println!();
    println!("Generated Contract:");
    println!("{}", "=".repeat(80));
    println!("{}", result.contract);
    println!("{}", "=".repeat(80));
    println!();
    println!("Metadata:");
    println!("Contract Type: {}", result.metadata.contract_type);
    println!("Generated At: {}", result.metadata.generated_at.to_rfc3339());
    println!("Model: {}", result.metadata.model);

    if let Some(path) = &args.out {
        std::fs::write(path, serde_json::to_string_pretty(&result)?)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nSaved result envelope to {}", path.display());
    }

    if let Some(url) = &args.send_to {
        let ack = generator.send_contract_draft(&result, url).await?;
        println!("\n{}", ack.message);
    }

    Ok(())
}

fn load_fields(args: &GenerateArgs) -> Result<FieldMap> {
    if let Some(path) = &args.input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON object of strings", path.display()))
    } else {
        Ok(args.fields.iter().cloned().collect())
    }
}
