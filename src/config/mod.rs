use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct DataSettings {
    /// Dataset the binary falls back to when no path is given on the
    /// command line.
    pub sample_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankingSettings {
    pub top_n: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationSettings {
    pub growth_threshold: f64,
    pub rapid_threshold: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data: DataSettings,
    pub ranking: RankingSettings,
    pub classification: ClassificationSettings,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading config file {}", path.as_ref().display()))?;
        let config: Config =
            serde_yaml::from_str(&contents).context("parsing trend configuration")?;
        Ok(config)
    }
}
