use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Install the global tracing subscriber.
///
/// The terminal belongs to the TUI, so log lines go to the configured file;
/// with no file configured, logging stays disabled.
pub fn init(settings: &LogSettings) {
    let Some(path) = &settings.file else {
        return;
    };

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("minim: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let filter =
        EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
