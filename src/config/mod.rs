mod loader;
mod schema;

pub use loader::{load_config, parse_config};
pub use schema::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_config(path)
    }

    /// `~/.joincode/config.yaml`, if a home directory can be found
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".joincode").join("config.yaml"))
    }

    /// Load from `path` when given, else from the default path when it
    /// exists, else fall back to built-in defaults
    pub fn resolve(path: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = path {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => {
                let config = Self::load(&default_path)?;
                Ok((config, Some(default_path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }
}
