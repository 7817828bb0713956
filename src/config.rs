use crate::error::{Result, TweetqlError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".tweetql.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// How new tweet IDs are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Monotonic counter; IDs are never reused after a delete.
    #[default]
    Sequential,
    /// Random alphanumeric IDs.
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub id_mode: IdMode,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_mode: IdMode::default(),
        }
    }
}

impl TweetqlConfig {
    /// Load the config, falling back to defaults when no file is found.
    ///
    /// An explicit `path` must exist; otherwise the search walks upward from
    /// `start_path` looking for `.tweetql.yml`.
    pub fn load(start_path: &Path, path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(TweetqlError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_file(start_path) {
                Some(p) => p,
                None => {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %config_path.display(), "loading config");
        let content = std::fs::read_to_string(&config_path)?;
        let config: TweetqlConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
