use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{registry, tag};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Registry host images are published to
    #[serde(default = "default_registry")]
    pub registry: String,

    /// Tag applied to published images
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_registry() -> String {
    registry::GHCR.to_string()
}

fn default_tag() -> String {
    tag::DEFAULT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            tag: default_tag(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("compose-ghcr").join("config.toml");
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
