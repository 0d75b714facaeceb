//! Info command - phonebook summary

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::StorageConfig;

/// Arguments for the info command
#[derive(Args, Clone)]
pub struct InfoArgs {
    /// JSON export of persons (defaults to the configured persons file)
    pub file: Option<PathBuf>,
}

/// Print the number of phonebook entries and the current time
pub async fn run(args: InfoArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let persons_file = args
        .file
        .map(|path| path.display().to_string())
        .or(config.storage.persons_file)
        .context("No persons file given and storage.persons_file is not configured")?;

    let services = crate::create_services_with_config(&StorageConfig {
        persons_file: Some(persons_file),
        ..Default::default()
    })?;

    println!("{}", services.persons.info().await?);
    Ok(())
}
