//! Fetch, screen, and render the digest.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{FixedOffset, Utc};
use paperscout_arxiv::{ArxivClient, build_query};
use paperscout_config::Config;
use paperscout_core::{PaperSource, select_papers};
use tracing::info;

use crate::render;

pub async fn run(config: &Config, output_override: Option<PathBuf>) -> anyhow::Result<()> {
    let roster = super::load_roster(config)?;
    if roster.is_empty() {
        anyhow::bail!("Member list is empty; add names to it before scraping");
    }
    info!("Loaded {} roster members", roster.len());

    let query = build_query(&config.search.category, roster.display_names());
    let client = ArxivClient::new(config.fetch.clone())?;
    let papers = client
        .recent_papers(&query, config.search.max_results)
        .await?;

    let selected = select_papers(
        papers,
        &roster,
        &config.search.screen,
        config.search.accepted_cutoff,
    );
    info!("Accepted {} papers after screening", selected.len());

    let offset = FixedOffset::east_opt(config.output.utc_offset_hours * 3600)
        .context("utc_offset_hours is out of range")?;
    let run_time = Utc::now().with_timezone(&offset);
    let html = render::render_digest(&selected, run_time);

    let out_path = match output_override {
        Some(path) => path,
        None => config.output_path()?,
    };
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out_path, html)
        .with_context(|| format!("Failed to write digest to {}", out_path.display()))?;

    println!("Wrote {} papers to {}", selected.len(), out_path.display());
    Ok(())
}
