use std::fs::{File, OpenOptions};
use std::io;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::LogSettings;

/// Route `log` records to the configured file. Without one every record is
/// discarded, `RUST_LOG` directives included, since stderr belongs to the
/// terminal UI.
pub fn init(settings: &LogSettings) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()));

    match open_log_file(settings) {
        Some(file) => builder.target(Target::Pipe(Box::new(file))),
        None => builder
            .target(Target::Pipe(Box::new(io::sink())))
            .filter_level(LevelFilter::Off),
    };

    // A logger may already be installed when embedded; keep it.
    let _ = builder.try_init();
}

/// Open `log.file` for appending, creating it if needed.
fn open_log_file(settings: &LogSettings) -> Option<File> {
    let path = settings.file.as_ref()?;
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("cadenza: cannot open log file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests;
