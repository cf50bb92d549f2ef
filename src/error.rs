//! Error types for the edges of the crate.
//!
//! The slider core itself never fails: degenerate numbers are clamped and
//! unrenderable times fall back to a default label. Errors only arise when
//! reading configuration.

/// A style value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unrecognized color name '{0}'")]
    UnknownColor(String),

    #[error("invalid hex color '{0}' (expected #rrggbb)")]
    InvalidHex(String),
}

/// Failure to load or validate [`crate::config::Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl SettingsError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}
