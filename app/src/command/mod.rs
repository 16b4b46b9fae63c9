//! CLI subcommands.

use anyhow::Context;
use paperscout_config::Config;
use paperscout_core::Roster;

pub mod check;
pub mod scrape;

/// Load and validate the member roster named by the config.
pub fn load_roster(config: &Config) -> anyhow::Result<Roster> {
    let path = config.roster_path()?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read member list at {}", path.display()))?;
    let roster = Roster::parse(&content)
        .with_context(|| format!("Invalid member list at {}", path.display()))?;
    Ok(roster)
}
