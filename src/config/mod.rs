use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How records are printed by list/get commands.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_seed() -> bool {
    true
}
fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rvolunteer")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rvolunteer")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvolunteer.conf")
    }

    /// Resolve the config path: explicit override or the platform default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    /// Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, at print time.
    pub fn validate(&self) -> AppResult<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Keys present in the default config but absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path)?;
        let on_disk: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let defaults = serde_yaml::to_value(Self::default())?;

        let mut missing = Vec::new();
        if let serde_yaml::Value::Mapping(expected) = defaults {
            for key in expected.keys() {
                let present = on_disk
                    .as_mapping()
                    .is_some_and(|m| m.contains_key(key));
                if !present && let Some(k) = key.as_str() {
                    missing.push(k.to_string());
                }
            }
        }
        Ok(missing)
    }
}
