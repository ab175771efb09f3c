//! Persistence for the font selection.
//!
//! The selection is stored as a small JSON object under one key of a
//! key-value store. [`FileStore`] keeps one file per key under a directory,
//! named by a hash of the key to avoid filesystem issues.

use crate::config::FontConfig;
use crate::constants::clamp_font_size;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// String key-value storage, e.g. browser local storage or a directory on disk.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key under `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let hash = format!("{:x}", hasher.finalize());
        self.dir.join(format!("{hash}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Shape of a saved blob; any field may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFontConfig {
    ui_font: Option<String>,
    mono_font: Option<String>,
    font_size: Option<f64>,
}

/// Decode a saved blob, filling each missing field from `defaults`.
pub fn decode_font_config(blob: &str, defaults: &FontConfig) -> Result<FontConfig> {
    let stored: StoredFontConfig =
        serde_json::from_str(blob).context("Failed to parse saved font config")?;
    Ok(FontConfig {
        ui_font: stored.ui_font.unwrap_or_else(|| defaults.ui_font.clone()),
        mono_font: stored
            .mono_font
            .unwrap_or_else(|| defaults.mono_font.clone()),
        font_size: stored
            .font_size
            .map(|size| clamp_font_size(size.round() as i64))
            .unwrap_or(defaults.font_size),
    })
}

pub fn encode_font_config(config: &FontConfig) -> Result<String> {
    serde_json::to_string(config).context("Failed to serialize font config")
}

/// Load the saved selection, or `defaults` when nothing usable is stored.
pub fn load_font_config<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    defaults: &FontConfig,
) -> FontConfig {
    let blob = match store.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!(%key, "No saved font config");
            return defaults.clone();
        }
        Err(err) => {
            warn!(%key, "Failed to read saved font config: {err:#}");
            return defaults.clone();
        }
    };
    match decode_font_config(&blob, defaults) {
        Ok(config) => {
            debug!(%key, ?config, "Loaded saved font config");
            config
        }
        Err(err) => {
            warn!(%key, "Ignoring corrupt font config: {err:#}");
            defaults.clone()
        }
    }
}

/// Persist the selection. Errors are logged and otherwise ignored.
pub fn save_font_config<S: KeyValueStore + ?Sized>(store: &S, key: &str, config: &FontConfig) {
    let result = encode_font_config(config).and_then(|blob| store.set(key, &blob));
    if let Err(err) = result {
        warn!(%key, "Failed to save font config: {err:#}");
    }
}
