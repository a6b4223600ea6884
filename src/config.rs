use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LinguaPlayError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Selections the app starts with.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub native_language: String,
    pub target_language: String,
    pub level: String,
    pub goal: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            native_language: "ar".to_string(),
            target_language: "en".to_string(),
            level: "starter".to_string(),
            goal: "أريد التحدث بثقة مع أصدقائي حول العالم.".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// TOML or JSON catalog replacing the built-in one.
    pub catalog_path: Option<String>,
    pub preferences_path: Option<String>,
    pub defaults: Defaults,
}

impl Config {
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(PathBuf::from)
    }

    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.preferences_path.as_ref().map(PathBuf::from)
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| {
        LinguaPlayError::Config(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path.display(),
            e
        ))
    })?;
    let loaded_config: Config = toml::from_str(&contents)?;

    if let Some(catalog_path) = loaded_config.catalog_path() {
        if !catalog_path.is_file() {
            return Err(LinguaPlayError::Config(format!(
                "catalog_path specified in {} ('{}') is not a file.",
                file_path.display(),
                catalog_path.display()
            )));
        }
    }

    log::info!("Loaded config from {}", file_path.display());
    Ok(loaded_config)
}

/// An explicitly requested file must load; the implicit `config.toml` may be
/// absent, in which case defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_from_file(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                load_config_from_file(path)
            } else {
                log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(Config::default())
            }
        }
    }
}
