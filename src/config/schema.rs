use std::path::PathBuf;

use serde::Deserialize;

/// Application settings, deserialized from the optional TOML file at
/// `$XDG_CONFIG_HOME/minim/config.toml` (path overridable through
/// `MINIM_CONFIG_PATH`) with `MINIM__`-prefixed environment variables
/// layered on top; anything not set anywhere takes the struct default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extension to treat as playable audio (case-insensitive, with or
    /// without the leading dot).
    pub extension: String,
    /// Whether to follow symlinks when reading the directory.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extension: "mp3".into(),
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ minim ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Where log lines go; the terminal itself belongs to the TUI. Logging
    /// stays off when no file is configured.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. "info" or "minim=debug".
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
