//! Normalize command - external form of stored documents

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;
use tracing::debug;

use crate::domain::{normalize_documents, EntityKind};

/// Arguments for the normalize command
#[derive(Args, Clone)]
pub struct NormalizeArgs {
    /// Kind of document: person, user or blog
    #[arg(long)]
    pub kind: EntityKind,

    /// JSON file holding one document or an array of documents
    pub file: PathBuf,
}

/// Print the normalized documents as JSON
pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    super::bootstrap();

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;
    let documents: Value = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not valid JSON", args.file.display()))?;

    debug!(kind = ?args.kind, path = %args.file.display(), "Normalizing documents");

    println!(
        "{}",
        serde_json::to_string_pretty(&normalize_documents(args.kind, documents))?
    );
    Ok(())
}
