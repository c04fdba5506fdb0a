use crate::config::Settings;

/// Load settings, falling back to defaults when the config is missing or
/// broken. This runs before the log subscriber is installed, so problems go
/// to stderr while the terminal is still a plain one.
pub fn load_settings() -> Settings {
    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("minim: failed to load config, using defaults: {e}");
            return Settings::default();
        }
    };

    if let Err(msg) = settings.validate() {
        eprintln!("minim: invalid config, using defaults: {msg}");
        return Settings::default();
    }

    settings
}
