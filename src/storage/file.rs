//! TOML-file-backed storage under the platform config directory.

use std::path::{Path, PathBuf};

use super::{StorageAdapter, StorageError};

/// Key-value storage persisted as a flat TOML table.
///
/// Reads tolerate a missing file (treated as empty); writes create the
/// parent directory on demand and rewrite the whole table.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default preference file path.
    ///
    /// Uses `~/.config/rosterly/preferences.toml` on Unix/macOS, or
    /// equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("rosterly").join("preferences.toml")
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_table(&self) -> Result<toml::Table, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => toml::from_str(&content).map_err(|e| StorageError::Parse {
                path: self.path.clone(),
                source: e,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(e) => Err(StorageError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

impl StorageAdapter for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let table = self.read_table().await?;
        Ok(table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Keep unrelated entries intact when rewriting the table.
        let mut table = self.read_table().await.unwrap_or_default();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
        }

        let content = toml::to_string(&table).map_err(|e| StorageError::Encode {
            path: self.path.clone(),
            source: e,
        })?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}
