//! Persistent key-value settings.
//!
//! Settings are a flat JSON object on disk. The only key pdfsplice itself
//! uses is the last chosen save directory.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, SpliceError};
use crate::io::ensure_dir;

/// Key under which the save directory is stored.
pub const SAVE_DIR_KEY: &str = "save_dir";

/// Directory name used for output when none was chosen yet.
pub const DEFAULT_SAVE_SUBDIR: &str = "files";

const APP_DIR: &str = "pdfsplice";
const FILE_NAME: &str = "settings.json";
const FALLBACK_FILE: &str = ".pdfsplice.json";

/// Settings backed by a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl SettingsStore {
    /// An empty store that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: Map::new(),
        }
    }

    /// Where settings live when no path is given.
    ///
    /// `pdfsplice/settings.json` under the platform config directory, or
    /// `.pdfsplice.json` in the working directory if there is none.
    pub fn default_location() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_FILE))
    }

    /// Load from `path`, or from [`default_location`](Self::default_location).
    ///
    /// A missing file gives an empty store. So does a file that isn't a JSON
    /// object, after logging a warning; saving will then replace it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(Self::default_location, Path::to_path_buf);

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file yet");
                return Ok(Self::new(path));
            }
            Err(err) => return Err(SpliceError::settings(path, err.to_string())),
        };

        let values = match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(values)) => values,
            Ok(_) => {
                warn!(path = %path.display(), "settings file is not a JSON object, ignoring it");
                Map::new()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "corrupt settings file, ignoring it");
                Map::new()
            }
        };

        Ok(Self { path, values })
    }

    /// Write the store back to its file, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            ensure_dir(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SpliceError::settings(self.path.clone(), e.to_string()))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| SpliceError::settings(self.path.clone(), e.to_string()))?;

        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value for `key`, if present and of type `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(key, error = %err, "ignoring setting of unexpected type");
                None
            }
        }
    }

    /// Store `value` under `key`. Not persisted until [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| SpliceError::settings(self.path.clone(), e.to_string()))?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove `key`, returning whether it was set.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// The remembered save directory, or `files` under the working
    /// directory.
    pub fn save_dir(&self) -> PathBuf {
        self.get::<PathBuf>(SAVE_DIR_KEY)
            .unwrap_or_else(default_save_dir)
    }

    /// Remember `dir` as the save directory.
    pub fn set_save_dir(&mut self, dir: &Path) -> Result<()> {
        self.set(SAVE_DIR_KEY, dir)
    }
}

fn default_save_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_default()
        .join(DEFAULT_SAVE_SUBDIR)
}
