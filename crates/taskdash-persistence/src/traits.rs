use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use taskdash_core::TaskdashResult;

/// Key-value store for local preferences.
///
/// Values are untyped JSON; use the typed helpers on `dyn SettingsRepository`
/// to read and write records.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored value, or `None` when the key was never saved.
    async fn get_raw(&self, key: &str) -> TaskdashResult<Option<Value>>;

    async fn set_raw(&self, key: &str, value: Value) -> TaskdashResult<()>;

    async fn remove(&self, key: &str) -> TaskdashResult<()>;

    /// Every stored key with its value, in key order.
    async fn entries(&self) -> TaskdashResult<Vec<(String, Value)>>;

    /// Backing file, for stores that have one.
    fn location(&self) -> Option<&Path>;
}

impl dyn SettingsRepository {
    /// Reads a record, falling back to `T::default()` when the key is absent.
    pub async fn load<T>(&self, key: &str) -> TaskdashResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.get_raw(key).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(T::default()),
        }
    }

    pub async fn save<T: Serialize + Sync>(&self, key: &str, record: &T) -> TaskdashResult<()> {
        let value = serde_json::to_value(record)?;
        self.set_raw(key, value).await
    }

    /// Reads a value stored verbatim as text. A non-string value is
    /// returned in its JSON form.
    pub async fn load_text(&self, key: &str, default: &str) -> TaskdashResult<String> {
        Ok(match self.get_raw(key).await? {
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => default.to_string(),
        })
    }

    pub async fn save_text(&self, key: &str, text: impl Into<String>) -> TaskdashResult<()> {
        self.set_raw(key, Value::String(text.into())).await
    }
}
