//! Stats command - aggregates a blog list

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::domain::BlogStatistics;
use crate::infrastructure::services::BlogService;
use crate::infrastructure::storage::{load_documents, InMemoryStorage};

/// Arguments for the stats command
#[derive(Args, Clone)]
pub struct StatsArgs {
    /// JSON export of blogs (defaults to the configured blogs file)
    pub file: Option<PathBuf>,
}

/// Print statistics for the blog list as JSON
pub async fn run(args: StatsArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let file = args
        .file
        .or_else(|| config.storage.blogs_file.map(PathBuf::from))
        .context("No blog file given and storage.blogs_file is not configured")?;

    let statistics = statistics_for(&file).await?;
    info!(path = %file.display(), blogs = statistics.blogs, "Computed blog statistics");

    println!("{}", serde_json::to_string_pretty(&statistics)?);
    Ok(())
}

async fn statistics_for(file: &Path) -> anyhow::Result<BlogStatistics> {
    let blogs = load_documents(file)?;
    let service = BlogService::new(Arc::new(InMemoryStorage::with_entities(blogs)));

    Ok(service.statistics().await?)
}
