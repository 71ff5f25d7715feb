use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use taskdash_client::{ApiClient, JiraStubProvider};
use taskdash_core::{AppConfig, TaskdashError, TaskdashResult};
use taskdash_persistence::{JsonSettingsStore, SettingsRepository};

use crate::cli::Cli;

/// Collaborators for one CLI invocation, built from the config file,
/// environment and global flags.
pub struct CliContext {
    pub config: AppConfig,
    pub api: ApiClient,
    pub importer: JiraStubProvider,
    settings_path: Option<PathBuf>,
}

impl CliContext {
    pub fn load(cli: &Cli) -> TaskdashResult<Self> {
        let config = resolve_config(AppConfig::load(), cli);
        let api = ApiClient::from_config(&config)?;
        tracing::debug!("Using API at {}", api.base_url());

        Ok(Self {
            importer: JiraStubProvider::from_config(&config),
            settings_path: config.effective_settings_path(),
            config,
            api,
        })
    }

    pub fn settings(&self) -> TaskdashResult<Arc<dyn SettingsRepository>> {
        let path = self.settings_path.clone().ok_or_else(|| {
            TaskdashError::Config("No settings location available; pass --settings".to_string())
        })?;
        Ok(Arc::new(JsonSettingsStore::new(path)))
    }
}

/// Flags win over the config file. Flags already include their
/// environment variables.
pub fn resolve_config(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(url) = &cli.api_url {
        config.api_url = Some(url.clone());
    }
    if let Some(path) = &cli.settings {
        config.settings_path = Some(path.clone());
    }
    config
}

/// Asks on stderr and reads stdin. Anything but y/yes declines.
pub fn confirm(prompt: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
