use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use copernicus_core::pipeline::config::RankingConfig;
use tracing::info;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default RankingConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = toml::to_string_pretty(&RankingConfig::default())?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// Read a RankingConfig from a TOML file; absent sections take their defaults.
pub fn load(path: &Path) -> Result<RankingConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&contents).context("Invalid ranking config")?;
    info!(path = %path.display(), "Loaded ranking config");
    Ok(config)
}
