use std::{fs, io, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::ReportClientError;

pub const SETTINGS_FILE_NAME: &str = "personality.toml";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl GenerationSettings {
    pub fn endpoint_url(&self) -> Result<Url, ReportClientError> {
        Url::parse(self.endpoint.trim()).map_err(|source| ReportClientError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Fields recognized in `personality.toml`. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
}

impl SettingsFile {
    fn apply(self, settings: &mut GenerationSettings) {
        if let Some(v) = self.api_key {
            settings.api_key = Some(v);
        }
        if let Some(v) = self.model {
            settings.model = v;
        }
        if let Some(v) = self.endpoint {
            settings.endpoint = v;
        }
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, ReportClientError> {
    let raw = fs::read_to_string(path).map_err(|source| ReportClientError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ReportClientError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Defaults, then `personality.toml` in the working directory, then env vars.
/// The implicit file is optional: a missing file is skipped and a broken one
/// is logged and skipped.
pub fn load_settings() -> GenerationSettings {
    load_default_settings(Path::new(SETTINGS_FILE_NAME), |name| std::env::var(name).ok())
}

fn load_default_settings(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> GenerationSettings {
    let mut settings = GenerationSettings::default();

    match read_settings_file(path) {
        Ok(file_cfg) => file_cfg.apply(&mut settings),
        Err(ReportClientError::SettingsRead { source, .. })
            if source.kind() == io::ErrorKind::NotFound => {}
        Err(err) => tracing::warn!("ignoring settings file: {err}"),
    }

    apply_env_overrides(&mut settings, env);
    settings
}

/// Loads an explicitly named settings file. Unlike [`load_settings`], the
/// file must exist and parse.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<GenerationSettings, ReportClientError> {
    let mut settings = GenerationSettings::default();
    read_settings_file(path)?.apply(&mut settings);
    apply_env_overrides(&mut settings, env);
    Ok(settings)
}

fn apply_env_overrides(settings: &mut GenerationSettings, env: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    // Later names win.
    for name in ["API_KEY", "GEMINI_API_KEY", "APP__GEMINI_API_KEY"] {
        if let Some(v) = non_empty(name) {
            settings.api_key = Some(v);
        }
    }

    if let Some(v) = non_empty("APP__GEMINI_MODEL") {
        settings.model = v;
    }

    if let Some(v) = non_empty("APP__GEMINI_ENDPOINT") {
        settings.endpoint = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
