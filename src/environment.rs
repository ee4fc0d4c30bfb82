//! Process-wide audio environment, detected once at startup.
//!
//! Nothing here belongs to a particular track: the capability table is shared
//! by every engine, and the output stream is opened once by the runtime.

use std::sync::OnceLock;

use rodio::{OutputStream, OutputStreamBuilder, StreamError};

use crate::engine::CanPlayType;

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

/// The capability table, built on first use.
pub fn capabilities() -> &'static Capabilities {
    CAPABILITIES.get_or_init(Capabilities::detect)
}

/// Codec support of the device backend, keyed by MIME subtype.
#[derive(Debug, Clone)]
pub struct Capabilities {
    formats: Vec<(&'static str, CanPlayType)>,
}

impl Capabilities {
    pub fn detect() -> Self {
        let formats = vec![
            ("mp3", CanPlayType::Probably),
            ("mpeg", CanPlayType::Probably),
            ("flac", CanPlayType::Probably),
            ("x-flac", CanPlayType::Probably),
            ("wav", CanPlayType::Probably),
            ("wave", CanPlayType::Probably),
            ("x-wav", CanPlayType::Probably),
            ("ogg", CanPlayType::Maybe),
            ("vorbis", CanPlayType::Maybe),
            ("mp4", CanPlayType::Maybe),
            ("m4a", CanPlayType::Maybe),
            ("x-m4a", CanPlayType::Maybe),
            ("aac", CanPlayType::Maybe),
        ];
        log::debug!("audio capabilities: {} formats", formats.len());
        Self { formats }
    }

    /// Answer for a string like `audio/mp3` or `audio/ogg; codecs=vorbis`.
    pub fn can_play_type(&self, mime: &str) -> CanPlayType {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        let essence = essence.to_ascii_lowercase();
        let Some(subtype) = essence.strip_prefix("audio/") else {
            return CanPlayType::No;
        };
        self.formats
            .iter()
            .find(|(name, _)| *name == subtype)
            .map(|(_, answer)| *answer)
            .unwrap_or(CanPlayType::No)
    }

    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|(name, _)| *name)
    }
}

/// Open the default output device.
pub fn open_output() -> Result<OutputStream, StreamError> {
    let mut stream = OutputStreamBuilder::open_default_stream()?;
    // rodio logs to stderr when the stream is dropped, which garbles the TUI.
    stream.log_on_drop(false);
    log::info!("opened default audio output");
    Ok(stream)
}
