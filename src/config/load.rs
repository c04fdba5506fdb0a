use std::env;
use std::path::PathBuf;

use super::schema::Settings;

impl Settings {
    /// Build settings from three layers: struct defaults, then the optional
    /// config file, then `MINIM__`-prefixed environment variables on top
    /// (`__` separates nesting levels, e.g. `MINIM__LIBRARY__EXTENSION`).
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_file() {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("MINIM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings no scan could ever match.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .library
            .extension
            .trim()
            .trim_start_matches('.')
            .is_empty()
        {
            return Err("library.extension must not be empty".to_string());
        }
        Ok(())
    }
}

/// The config file location: `MINIM_CONFIG_PATH` wins, then the XDG default.
pub fn config_file() -> Option<PathBuf> {
    env::var_os("MINIM_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(xdg_config_file)
}

/// `$XDG_CONFIG_HOME/minim/config.toml`, or `~/.config/minim/config.toml`
/// when `XDG_CONFIG_HOME` is unset.
pub(super) fn xdg_config_file() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("minim").join("config.toml"))
}
