use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env var that overrides the configured API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub youtube: YoutubeConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct YoutubeConfig {
    #[serde(default)]
    pub api_key: String,
    /// Page size for listing requests.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Default region code for trending, e.g. "US".
    #[serde(default)]
    pub region: Option<String>,
}

fn default_max_results() -> u32 {
    21
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_results: default_max_results(),
            region: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    /// yet.
    pub fn load_or_default(path: &PathBuf) -> Self {
        if path.exists() {
            Self::load_from_file(path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Like `load_or_default`, with the `YOUTUBE_API_KEY` env var taking
    /// precedence over the file. Use this for reads; mutations go through
    /// `load_or_default` so the env key never gets written back to disk.
    pub fn load_with_env(path: &PathBuf) -> Self {
        let mut config = Self::load_or_default(path);
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.youtube.api_key = key;
            }
        }
        config
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.youtube.api_key.is_empty() || self.youtube.api_key == API_KEY_PLACEHOLDER {
            return Err(anyhow::anyhow!(
                "No YouTube API key configured. Run 'vidscout config set-key <KEY>' or set {}",
                API_KEY_ENV
            ));
        }
        if self.youtube.max_results == 0 {
            return Err(anyhow::anyhow!("max_results must be at least 1"));
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            youtube: YoutubeConfig {
                api_key: "test_key".to_string(),
                max_results: 10,
                region: Some("US".to_string()),
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.youtube.api_key, "test_key");
        assert_eq!(loaded.youtube.max_results, 10);
        assert_eq!(loaded.youtube.region.as_deref(), Some("US"));
    }

    #[test]
    fn test_defaults_apply_to_sparse_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        std::fs::write(&path, "[youtube]\napi_key = \"k\"\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.youtube.max_results, 21);
        assert_eq!(loaded.youtube.region, None);
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let config = Config::default();
        assert!(config.validate().is_err());
        assert!(!config.is_configured());

        let config = Config {
            youtube: YoutubeConfig {
                api_key: "YOUR_API_KEY".to_string(),
                ..YoutubeConfig::default()
            },
        };
        assert!(config.validate().is_err());

        let config = Config {
            youtube: YoutubeConfig {
                api_key: "real".to_string(),
                ..YoutubeConfig::default()
            },
        };
        assert!(config.validate().is_ok());
    }
}
