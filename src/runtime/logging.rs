use std::fs::OpenOptions;
use std::sync::Mutex;

use mediaslider::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Install a file-backed `tracing` subscriber when a log file is configured.
///
/// The terminal is owned by the UI, so without a file nothing is installed.
pub fn init(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &settings.file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|e| {
        eprintln!("mediaslider: bad log level '{}', using info: {e}", settings.level);
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
