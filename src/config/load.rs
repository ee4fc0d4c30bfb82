use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::{LogSettings, Settings};

/// Why a set of settings was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read config: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("ui.tick_ms must be >= 1")]
    ZeroTick,
    #[error("playback.seek_step_seconds must be >= 1")]
    ZeroSeekStep,
}

impl Settings {
    /// Load from the resolved config path (see [`resolve_config_path`]) and
    /// the `CADENZA__` environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load from `path` (skipped when missing) with environment overrides on
    /// top. A relative `log.file` is taken relative to the config file.
    pub fn load_from(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix("CADENZA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.log.anchor(path.and_then(Path::parent));
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.ui.tick_ms == 0 {
            return Err(SettingsError::ZeroTick);
        }
        if self.playback.seek_step_seconds == 0 {
            return Err(SettingsError::ZeroSeekStep);
        }
        Ok(())
    }
}

impl LogSettings {
    /// Expand a leading `~` and join relative log paths onto `base`.
    fn anchor(&mut self, base: Option<&Path>) {
        let Some(file) = self.file.take() else {
            return;
        };
        let file = match file.strip_prefix("~") {
            Ok(rest) => match env::var_os("HOME") {
                Some(home) => PathBuf::from(home).join(rest),
                None => file,
            },
            Err(_) => file,
        };
        self.file = Some(match base {
            Some(dir) if file.is_relative() => dir.join(file),
            _ => file,
        });
    }
}

/// `$CADENZA_CONFIG_PATH` when set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("CADENZA_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `cadenza/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("cadenza").join("config.toml"))
}
