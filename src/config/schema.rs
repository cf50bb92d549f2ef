use std::path::PathBuf;

use serde::Deserialize;

use crate::style::SliderStyle;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mediaslider/config.toml` or
/// `~/.config/mediaslider/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MEDIASLIDER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Colors and label font. See [`SliderStyle`] for defaults.
    ///
    /// Colors accept names (`"gray"`, `"dark-gray"`) or `"#rrggbb"`.
    pub style: SliderStyle,
    pub controls: ControlsSettings,
    pub demo: DemoSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ControlsSettings {
    /// Half-width of the band around the knob center that starts a drag, in
    /// the host's units.
    ///
    /// Unset means the host's own default: 22 pixels
    /// (`DEFAULT_DRAG_CAPTURE_DELTA`) for pixel hosts, 2 columns for the
    /// terminal demo.
    pub drag_capture_delta: Option<f64>,
}

impl ControlsSettings {
    /// Configured capture delta, or `default` when unset.
    pub fn drag_capture_delta_or(&self, default: f64) -> f64 {
        self.drag_capture_delta.unwrap_or(default)
    }
}

/// Settings for the bundled terminal demo.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Length of the simulated media (seconds).
    pub total_seconds: f64,
    /// Interval between playback clock ticks (milliseconds).
    pub tick_ms: u64,
    /// Columns reserved for each time label.
    pub label_width: u16,
    /// Columns taken by the knob.
    pub knob_width: u16,
    /// Whether the simulated clock starts running.
    pub autoplay: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            total_seconds: 245.0,
            tick_ms: 250,
            label_width: 9,
            knob_width: 1,
            autoplay: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `"debug"` or `"mediaslider=trace"`.
    pub level: String,
    /// Log file. The terminal belongs to the UI, so nothing is logged when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
