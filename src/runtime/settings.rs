use crate::config::{Settings, SettingsError};

/// Settings for this run. A broken or invalid config never stops playback:
/// defaults are used and the reason is handed back for the log.
pub fn load_settings() -> (Settings, Option<SettingsError>) {
    match Settings::load().and_then(|s| s.validate().map(|()| s)) {
        Ok(settings) => (settings, None),
        Err(err) => {
            // Logging is not up yet and the UI has not taken the terminal.
            eprintln!("cadenza: using default settings: {err}");
            (Settings::default(), Some(err))
        }
    }
}
