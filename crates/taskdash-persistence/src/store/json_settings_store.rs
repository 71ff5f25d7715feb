use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use taskdash_core::{TaskdashError, TaskdashResult};
use tokio::sync::Mutex;

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::SettingsRepository;

/// Settings kept as one pretty-printed JSON object, one member per key.
///
/// The file is read on every access so edits made by another process (or by
/// hand) are picked up. Writes within this process are serialized.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> TaskdashResult<Map<String, Value>> {
        let bytes = match AtomicWriter::read_if_exists(&self.path).await? {
            Some(bytes) => bytes,
            None => return Ok(Map::new()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }
        let value: Value = serde_json::from_slice(&bytes)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(TaskdashError::Serialization(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    async fn write_map(&self, map: Map<String, Value>) -> TaskdashResult<()> {
        let bytes = serde_json::to_vec_pretty(&Value::Object(map))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsStore {
    async fn get_raw(&self, key: &str) -> TaskdashResult<Option<Value>> {
        Ok(self.read_map().await?.remove(key))
    }

    async fn set_raw(&self, key: &str, value: Value) -> TaskdashResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        self.write_map(map).await?;
        tracing::info!("Saved setting {} to {}", key, self.path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskdashResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(map).await?;
            tracing::info!("Removed setting {} from {}", key, self.path.display());
        }
        Ok(())
    }

    async fn entries(&self) -> TaskdashResult<Vec<(String, Value)>> {
        let mut entries: Vec<_> = self.read_map().await?.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
