//! Opening a file into a `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use super::error::EngineError;

pub(super) struct OpenedSink {
    pub sink: Sink,
    /// Length reported by the decoder; many formats leave this empty.
    pub total_duration: Option<Duration>,
}

/// Create a paused `Sink` for the file at `path`, starting at `start_at`.
pub(super) fn open_sink_at(
    mixer: &Mixer,
    path: &Path,
    start_at: Duration,
) -> Result<OpenedSink, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file))?;
    let total_duration = decoder.total_duration();
    // `skip_duration` is the fallback seeking primitive; Duration::ZERO is fine.
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(mixer);
    sink.append(source);
    sink.pause();
    Ok(OpenedSink {
        sink,
        total_duration,
    })
}
