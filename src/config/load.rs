use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::SettingsError;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `MEDIASLIDER__`),
/// then an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MEDIASLIDER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        tracing::debug!(path = ?config_path, "settings loaded");
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(delta) = self.controls.drag_capture_delta
            && (!delta.is_finite() || delta < 0.0)
        {
            return Err(SettingsError::invalid(
                "controls.drag_capture_delta",
                format!("must be a non-negative number, got {delta}"),
            ));
        }
        let total = self.demo.total_seconds;
        if !total.is_finite() || total < 0.0 {
            return Err(SettingsError::invalid(
                "demo.total_seconds",
                format!("must be a non-negative number, got {total}"),
            ));
        }
        if self.demo.tick_ms == 0 {
            return Err(SettingsError::invalid("demo.tick_ms", "must be >= 1"));
        }
        let size = self.style.label_font.size;
        if !(size.is_finite() && size > 0.0) {
            return Err(SettingsError::invalid("style.label_font.size", "must be > 0"));
        }
        Ok(())
    }
}

/// Resolve the config path from `MEDIASLIDER_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MEDIASLIDER_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/mediaslider/config.toml`
/// or `~/.config/mediaslider/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("mediaslider").join("config.toml"))
}
