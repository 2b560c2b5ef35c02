use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&contents)
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;

    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    // An empty file deserializes to null, treat it as all defaults
    let config: Config = if contents.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(contents).context("Failed to parse config")?
    };

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    let level = config.logging.level.to_lowercase();
    if !VALID_LEVELS.contains(&level.as_str()) {
        anyhow::bail!("Invalid log level: {}", config.logging.level);
    }

    if !VALID_FORMATS.contains(&config.logging.format.as_str()) {
        anyhow::bail!("Invalid log format: {}", config.logging.format);
    }

    Ok(())
}
