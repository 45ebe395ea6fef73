//! Persistence for user settings such as the backend address.

use anyhow::Context;
use casegen_core::DEFAULT_ITEMS_PER_PAGE;
use casegen_core::api::DEFAULT_OPERATION;
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppSettings {
    pub(crate) backend_url: String,
    pub(crate) items_per_page: usize,
    pub(crate) operation: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            operation: DEFAULT_OPERATION.to_string(),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Casegen", "Casegen")
        .map(|dirs| dirs.data_dir().join("settings.json"))
}

pub(crate) fn load_settings() -> AppSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => AppSettings::default(),
    }
}

pub(crate) fn save_settings(settings: &AppSettings) -> anyhow::Result<()> {
    let Some(path) = settings_path() else {
        return Ok(());
    };
    save_settings_to(&path, settings)
}

fn load_settings_from(path: &Path) -> AppSettings {
    let Ok(contents) = fs::read_to_string(path) else {
        return AppSettings::default();
    };
    match serde_json::from_str::<AppSettings>(&contents) {
        Ok(mut settings) => {
            settings.items_per_page = settings.items_per_page.max(1);
            settings
        }
        Err(err) => {
            tracing::warn!("Settings file unreadable: {err}");
            AppSettings::default()
        }
    }
}

fn save_settings_to(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(path, payload).with_context(|| format!("Could not write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.items_per_page, 10);
    }

    #[test]
    fn saved_settings_load_back() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            backend_url: "http://10.0.0.5:9000".into(),
            items_per_page: 25,
            operation: "Negative".into(),
        };
        save_settings_to(&path, &settings)?;
        assert_eq!(load_settings_from(&path), settings);
        Ok(())
    }

    #[test]
    fn partial_file_fills_in_defaults() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"items_per_page": 0}"#)?;
        let settings = load_settings_from(&path);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(settings.items_per_page, 1);
        Ok(())
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json")?;
        assert_eq!(load_settings_from(&path), AppSettings::default());
        Ok(())
    }
}
