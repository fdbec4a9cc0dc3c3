use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    geocode,
    provider::{ProviderId, openmeteo},
    units::{TemperatureUnit, Theme},
};

/// User preferences stored on disk.
///
/// Example TOML:
/// ```toml
/// temperature_unit = "celsius"
/// theme = "dark"
/// default_provider = "open-meteo"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub temperature_unit: TemperatureUnit,
    pub theme: Theme,

    /// Optional provider id, "open-meteo" (default) or "sample".
    pub default_provider: Option<String>,

    /// Override for the forecast API origin.
    pub forecast_base_url: Option<String>,

    /// Override for the geocoding API origin.
    pub geocoding_base_url: Option<String>,
}

impl Config {
    /// Return the default provider as a strongly-typed ProviderId.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        match self.default_provider.as_deref() {
            Some(s) => ProviderId::try_from(s),
            None => Ok(ProviderId::OpenMeteo),
        }
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    pub fn forecast_base_url(&self) -> &str {
        self.forecast_base_url.as_deref().unwrap_or(openmeteo::DEFAULT_BASE_URL)
    }

    pub fn geocoding_base_url(&self) -> &str {
        self.geocoding_base_url.as_deref().unwrap_or(geocode::DEFAULT_BASE_URL)
    }

    pub fn toggle_unit(&mut self) -> TemperatureUnit {
        self.temperature_unit = self.temperature_unit.toggle();
        self.temperature_unit
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.forecast_base_url(), "https://api.open-meteo.com");
        assert_eq!(cfg.geocoding_base_url(), "https://geocoding-api.open-meteo.com");
    }

    #[test]
    fn set_default_provider_overrides_default() {
        let mut cfg = Config::default();
        assert_eq!(cfg.default_provider_id().unwrap(), ProviderId::OpenMeteo);

        cfg.set_default_provider(ProviderId::Sample);
        assert_eq!(cfg.default_provider_id().unwrap(), ProviderId::Sample);
        assert_eq!(cfg.default_provider.as_deref(), Some("sample"));
    }

    #[test]
    fn toggles_update_config() {
        let mut cfg = Config::default();
        assert_eq!(cfg.toggle_unit(), TemperatureUnit::Celsius);
        assert_eq!(cfg.toggle_theme(), Theme::Dark);
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.theme, Theme::Dark);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_keeps_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.toggle_unit();
        cfg.toggle_theme();
        cfg.set_default_provider(ProviderId::Sample);
        cfg.save_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("temperature_unit = \"celsius\""));
        assert!(written.contains("theme = \"dark\""));

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.theme, Theme::Dark);
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn broken_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
