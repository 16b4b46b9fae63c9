use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use paperscout_arxiv::ArxivConfig;
// Screening thresholds live with the matching core to avoid duplication.
use paperscout_core::ScreenOptions;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fetch: ArxivConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// arXiv category filter, e.g. `astro-ph*`.
    #[serde(default = "SearchConfig::default_category")]
    pub category: String,

    /// How many feed entries to request.
    #[serde(default = "SearchConfig::default_max_results")]
    pub max_results: usize,

    /// Stop accepting papers after this many.
    #[serde(default = "SearchConfig::default_accepted_cutoff")]
    pub accepted_cutoff: usize,

    #[serde(default)]
    pub screen: ScreenOptions,
}

impl SearchConfig {
    fn default_category() -> String {
        "astro-ph*".to_string()
    }

    const fn default_max_results() -> usize {
        100
    }

    const fn default_accepted_cutoff() -> usize {
        10
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            category: Self::default_category(),
            max_results: Self::default_max_results(),
            accepted_cutoff: Self::default_accepted_cutoff(),
            screen: ScreenOptions::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Where the HTML digest lands. Defaults to `~/paperscout/digest.html`.
    #[serde(default)]
    pub html_path: Option<PathBuf>,

    /// Offset applied to the rendered run timestamp.
    #[serde(default = "OutputConfig::default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl OutputConfig {
    const fn default_utc_offset_hours() -> i32 {
        -7
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html_path: None,
            utc_offset_hours: Self::default_utc_offset_hours(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RosterConfig {
    /// Member list location. Defaults to `~/paperscout/members.txt`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'paperscout init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("paperscout"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Resolved member-list path.
    pub fn roster_path(&self) -> anyhow::Result<PathBuf> {
        match &self.roster.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("members.txt")),
        }
    }

    /// Resolved digest output path.
    pub fn output_path(&self) -> anyhow::Result<PathBuf> {
        match &self.output.html_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("digest.html")),
        }
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "search": {
    "category": "astro-ph*",
    "max_results": 100,
    "accepted_cutoff": 10,
    "screen": {
      "byline_window": 3,
      "min_confidence": "weak"
    }
  },
  "fetch": {
    "base_url": "https://export.arxiv.org/api/query",
    "timeout": 30,
    "user_agent": "Mozilla/5.0 (compatible; paperscout/0.1)"
  },
  "output": {
    "html_path": null,
    "utc_offset_hours": -7
  },
  "roster": {
    "path": null
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());

        let members_path = config_dir.join("members.txt");
        if !members_path.exists() {
            std::fs::write(&members_path, "")?;
            println!("✅ Created empty member list at: {}", members_path.display());
        }

        println!();
        println!("📝 Next steps:");
        println!("   1. Add one member per line to members.txt (First [Middle] Last)");
        println!("   2. Adjust the search category if you are not after astro-ph");
        println!("   3. Run 'paperscout scrape'");

        Ok(())
    }
}
