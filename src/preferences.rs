use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::{LinguaPlayError, Result};

// Serialized as a flat JSON object: {"linguaplay-theme": "dark", ...}
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
struct PreferenceFile {
    values: BTreeMap<String, String>,
}

/// String key/value settings persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            log::info!("No preferences at {}, starting empty", path.display());
            return Ok(PreferenceStore {
                path,
                values: BTreeMap::new(),
            });
        }

        let reader = BufReader::new(File::open(&path)?);
        let file: PreferenceFile = serde_json::from_reader(reader)?;
        log::info!(
            "Loaded {} preference(s) from {}",
            file.values.len(),
            path.display()
        );
        Ok(PreferenceStore {
            path,
            values: file.values,
        })
    }

    /// `<data dir>/linguaplay/preferences.json`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join("linguaplay").join("preferences.json"))
            .ok_or_else(|| {
                LinguaPlayError::Config("could not determine a local data directory".to_string())
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` and rewrites the file.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let writer = BufWriter::new(File::create(&self.path)?);
        let file = PreferenceFile {
            values: self.values.clone(),
        };
        serde_json::to_writer_pretty(writer, &file)?;
        Ok(())
    }
}
