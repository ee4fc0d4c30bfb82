use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;

/// Read the duration from the file's headers without decoding audio.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let duration = tagged.properties().duration();
            (!duration.is_zero()).then_some(duration)
        }
        Err(err) => {
            log::debug!("no duration metadata for {}: {err}", path.display());
            None
        }
    }
}
