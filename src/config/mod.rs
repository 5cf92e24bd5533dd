//! This module handles the application's persisted preferences, loading and
//! saving them to a `settings.toml` file in the platform config directory.
//!
//! The only preference the portal keeps between runs is the theme choice;
//! everything else (webhook endpoint, API key, window title) comes from the
//! environment and is never written back.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PrintPortal";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Resolves the preferences file path. An explicit `config_dir` (from the
/// `--config-dir` flag) takes precedence over the platform default.
fn config_path(config_dir: Option<&Path>) -> Option<PathBuf> {
    match config_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(CONFIG_FILE);
            path
        }),
    }
}

pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path(config_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, config_dir: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(config_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_theme() {
        let config = Config {
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            theme_mode: ThemeMode::Light,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn explicit_config_dir_takes_precedence() {
        let dir = PathBuf::from("/custom/config/path");
        let path = config_path(Some(&dir));
        assert_eq!(path, Some(dir.join(CONFIG_FILE)));
    }

    #[test]
    fn default_config_uses_system_theme() {
        let config = Config::default();
        assert_eq!(config.theme_mode, ThemeMode::System);
    }
}
