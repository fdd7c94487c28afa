//! CLI argument parsing

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

/// Contract Draft CLI
///
/// Generates legal-document drafts (tenancy, employment, NDA, and more)
/// from contract-type templates and user-supplied field values.
#[derive(Parser, Debug)]
#[command(name = "contract-draft")]
#[command(version)]
#[command(about = "Generate legal-document drafts from contract templates", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported contract types and their required fields
    Types,

    /// Generate a contract draft
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Forward a saved draft to a storage backend
    Send(SendArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Contract type (see `contract-draft types`)
    #[arg(long = "type", value_name = "CONTRACT_TYPE")]
    pub contract_type: String,

    /// Field value as name=value; repeat for each field
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Read fields from a JSON object file instead of --field flags
    #[arg(long, conflicts_with = "fields")]
    pub input: Option<PathBuf>,

    /// Write the full result envelope (JSON) to this file
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also forward the generated result to this backend URL as a draft
    #[arg(long, env = "CONTRACT_BACKEND_URL")]
    pub send_to: Option<Url>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Result envelope JSON produced by `generate --out`
    #[arg(long)]
    pub input: PathBuf,

    /// Backend endpoint that stores draft records
    #[arg(long, env = "CONTRACT_BACKEND_URL")]
    pub backend_url: Url,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_splits_on_first_equals() {
        let (name, value) = parse_field("term=2 years = at least").unwrap();
        assert_eq!(name, "term");
        assert_eq!(value, "2 years = at least");
    }

    #[test]
    fn parse_field_rejects_missing_separator() {
        assert!(parse_field("term").is_err());
        assert!(parse_field("=value").is_err());
    }
}
