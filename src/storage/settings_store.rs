//! JSON-file key-value settings store.
//!
//! Mirrors a browser extension's local storage area: a flat object of keys,
//! `get` reads a subset, `set` merges keys into what is already stored.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::StoredSettings;

/// File-backed settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole store; a missing file is an empty store
    async fn read_all(&self) -> AppResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(AppError::storage(&self.path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&raw).map_err(|e| AppError::storage(&self.path, e))? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::storage(
                &self.path,
                anyhow::anyhow!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Returns the stored values for `keys`; absent keys are omitted
    pub async fn get(&self, keys: &[&str]) -> AppResult<Map<String, Value>> {
        let mut all = self.read_all().await?;
        Ok(keys
            .iter()
            .filter_map(|key| all.remove(*key).map(|value| (key.to_string(), value)))
            .collect())
    }

    /// Merges `items` into the store
    ///
    /// Each write goes to its own temp file in the store's directory, which is
    /// then renamed over the store, so readers never observe a partial file.
    /// Clones of a store share a write lock covering the read-modify-write.
    pub async fn set(&self, items: Map<String, Value>) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut all = self.read_all().await?;
        all.extend(items);

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::storage(parent, e))?;
                parent.to_path_buf()
            }
            None => PathBuf::from("."),
        };

        let body = serde_json::to_vec_pretty(&Value::Object(all))
            .map_err(|e| AppError::storage(&self.path, e))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_replacing(&dir, &path, &body))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::Error::new(e).context("Settings write task failed"),
            })??;

        tracing::debug!(path = %self.path.display(), "Settings store updated");
        Ok(())
    }

    /// Reads every known settings key
    pub async fn load_settings(&self) -> AppResult<StoredSettings> {
        let values = self.get(&StoredSettings::KEYS).await?;
        serde_json::from_value(Value::Object(values))
            .map_err(|e| AppError::storage(&self.path, e))
    }

    /// Writes the present fields of `settings`, leaving other keys untouched
    pub async fn save_settings(&self, settings: &StoredSettings) -> AppResult<()> {
        match serde_json::to_value(settings).map_err(|e| AppError::storage(&self.path, e))? {
            Value::Object(items) => self.set(items).await,
            other => Err(AppError::storage(
                &self.path,
                anyhow::anyhow!("settings serialized to {}", json_kind(&other)),
            )),
        }
    }
}

fn write_replacing(dir: &Path, path: &Path, body: &[u8]) -> AppResult<()> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AppError::storage(dir, e))?;
    tmp.write_all(body)
        .map_err(|e| AppError::storage(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| AppError::storage(path, e.error))?;
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
