use crate::cli::SettingsAction;
use crate::context::CliContext;
use crate::output;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use taskdash_domain::{
    GeneralSettings, JiraConnection, NotificationSettings, SettingsKey, DEFAULT_JIRA_YAML,
};
use taskdash_persistence::SettingsRepository;

pub async fn handle(ctx: &CliContext, action: SettingsAction) -> anyhow::Result<()> {
    let store = ctx.settings()?;
    match action {
        SettingsAction::Show => {
            let mut all = Map::new();
            for key in SettingsKey::ALL {
                all.insert(key.to_string(), read(&store, key).await?);
            }
            output::output_success(Value::Object(all));
        }
        SettingsAction::List => {
            let stored: Map<String, Value> = store.entries().await?.into_iter().collect();
            output::output_success(Value::Object(stored));
        }
        SettingsAction::Get { key } => {
            let value = read(&store, known_key(&key)?).await?;
            output::output_success(json!({ "key": key, "value": value }));
        }
        SettingsAction::Set { key, value } => {
            let key = known_key(&key)?;
            let stored = write(&store, key, &value).await?;
            output::output_success(json!({ "key": key, "value": stored }));
        }
        SettingsAction::Reset { key } => {
            let key = known_key(&key)?;
            store.remove(key).await?;
            let value = read(&store, key).await?;
            output::output_success(json!({ "key": key, "value": value }));
        }
        SettingsAction::Path => {
            let path = store.location().map(|p| p.display().to_string());
            output::output_success(json!({ "path": path }));
        }
    }
    Ok(())
}

fn known_key(key: &str) -> anyhow::Result<&'static str> {
    SettingsKey::ALL
        .into_iter()
        .find(|known| *known == key)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown settings key '{}'. Expected one of: {}",
                key,
                SettingsKey::ALL.join(", ")
            )
        })
}

async fn typed<T>(store: &Arc<dyn SettingsRepository>, key: &str) -> anyhow::Result<Value>
where
    T: DeserializeOwned + Serialize + Default,
{
    let record: T = store.load(key).await?;
    Ok(serde_json::to_value(record)?)
}

/// Stored value for `key`, or its default.
async fn read(store: &Arc<dyn SettingsRepository>, key: &str) -> anyhow::Result<Value> {
    match key {
        SettingsKey::JIRA_YAML => Ok(Value::String(store.load_text(key, DEFAULT_JIRA_YAML).await?)),
        SettingsKey::JIRA_FORM => typed::<JiraConnection>(store, key).await,
        SettingsKey::GENERAL => typed::<GeneralSettings>(store, key).await,
        SettingsKey::NOTIFICATIONS => typed::<NotificationSettings>(store, key).await,
        other => anyhow::bail!("Unknown settings key '{}'", other),
    }
}

async fn write_typed<T>(store: &Arc<dyn SettingsRepository>, key: &str, raw: &str) -> anyhow::Result<Value>
where
    T: DeserializeOwned + Serialize + Sync,
{
    let record: T = serde_json::from_str(raw)
        .map_err(|e| anyhow::anyhow!("Invalid value for '{}': {}", key, e))?;
    store.save(key, &record).await?;
    Ok(serde_json::to_value(&record)?)
}

/// Stores `raw`: verbatim for the YAML blob, validated JSON otherwise.
async fn write(store: &Arc<dyn SettingsRepository>, key: &str, raw: &str) -> anyhow::Result<Value> {
    match key {
        SettingsKey::JIRA_YAML => {
            store.save_text(key, raw).await?;
            Ok(Value::String(raw.to_string()))
        }
        SettingsKey::JIRA_FORM => write_typed::<JiraConnection>(store, key, raw).await,
        SettingsKey::GENERAL => write_typed::<GeneralSettings>(store, key, raw).await,
        SettingsKey::NOTIFICATIONS => write_typed::<NotificationSettings>(store, key, raw).await,
        other => anyhow::bail!("Unknown settings key '{}'", other),
    }
}
