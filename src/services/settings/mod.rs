// Settings persistence
// Loads and saves the TOML settings file under the platform config dir

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub fn resolve_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "BirthdayTribute", "TributeApp") {
        let dir = dirs.config_dir();
        fs::create_dir_all(dir).ok();
        dir.join("settings.toml")
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from("settings.toml")
    }
}

/// A missing file yields defaults; an unreadable or unparseable one is an
/// error for the caller to decide on.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    Ok(settings)
}

/// Startup variant: never fails, logs and falls back to defaults instead.
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Falling back to default settings: {err:?}");
            Settings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.theme = "dark".to_string();
        settings.honoree = "Star".to_string();
        settings.anniversary_month = 1;
        settings.anniversary_day = 1;

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert!(load_settings(&path).is_err());
    }

    #[test]
    fn load_or_default_swallows_bad_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert_eq!(load_settings_or_default(&path), Settings::default());
    }
}
