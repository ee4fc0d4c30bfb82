//! Application model types: `App` and `PlaybackState`.

use crate::config::{TimeField, UiSettings};
use crate::engine::MediaError;
use crate::track::{Track, format_time};

/// What the screen shows as the track's state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Loading,
    Playing,
    Paused,
    Finished,
    Failed,
}

impl PlaybackState {
    /// Derive the label from a track's observable flags. `error_live` says
    /// whether the track's last error is newer than its last `Playing`; a
    /// failed load leaves `is_loading` set, so a live error outranks it.
    pub fn of(track: &dyn Track, error_live: bool) -> Self {
        if track.is_playing() {
            Self::Playing
        } else if error_live && track.last_error().is_some() {
            Self::Failed
        } else if track.is_loading() {
            Self::Loading
        } else if track.is_finished() {
            Self::Finished
        } else if track.progress() > 0.0 {
            Self::Paused
        } else {
            Self::Stopped
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Loading => "Loading",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Finished => "Finished",
            Self::Failed => "Error",
        }
    }
}

/// The main application model.
pub struct App {
    pub track: Box<dyn Track>,
    pub seek_step_seconds: u64,
    /// One-line message for the status bar, e.g. a rejected seek.
    pub status: Option<String>,
    pub should_quit: bool,
    /// The track's last error has not been followed by playback.
    error_live: bool,
    /// Last seek target and the progress it was taken from. While progress
    /// stays put (paused, or no time update yet) seeks chain from the target.
    seek_cursor: Option<(f64, f64)>,
}

impl App {
    pub fn new(track: Box<dyn Track>, seek_step_seconds: u64) -> Self {
        let error_live = !track.is_playing() && track.last_error().is_some();
        Self {
            track,
            seek_step_seconds,
            status: None,
            should_quit: false,
            error_live,
            seek_cursor: None,
        }
    }

    pub fn playback(&self) -> PlaybackState {
        PlaybackState::of(self.track.as_ref(), self.error_live)
    }

    /// Apply pending engine events to the track.
    pub fn tick(&mut self) {
        let was_playing = self.track.is_playing();
        let previous: Option<MediaError> = self.track.last_error().cloned();
        self.track.dispatch_events();

        // Only `Error` and `Ended` clear `is_playing` during dispatch.
        let interrupted = was_playing && !self.track.is_playing() && !self.track.is_finished();
        let current = self.track.last_error();
        if self.track.is_playing() {
            self.error_live = false;
        } else if current.is_some() && (interrupted || current != previous.as_ref()) {
            self.error_live = true;
        }
    }

    pub fn toggle_play_pause(&mut self) {
        self.status = None;
        if self.track.is_playing() {
            self.track.pause();
        } else {
            self.track.play();
        }
    }

    pub fn stop(&mut self) {
        self.status = None;
        self.track.stop();
    }

    /// Seek relative to the last known position, never before zero.
    pub fn seek_by(&mut self, seconds: i64) {
        let progress = self.track.progress();
        let base = match self.seek_cursor {
            Some((target, from)) if from == progress => target,
            _ => progress,
        };
        let target = (base + seconds as f64).max(0.0);
        match self.track.seek_to(target) {
            Ok(()) => {
                self.seek_cursor = Some((target, progress));
                self.status = None;
            }
            Err(err) => {
                self.seek_cursor = None;
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn seek_forward(&mut self) {
        self.seek_by(self.seek_step_seconds as i64);
    }

    pub fn seek_backward(&mut self) {
        self.seek_by(-(self.seek_step_seconds as i64));
    }

    pub fn quit(&mut self) {
        self.track.stop();
        self.should_quit = true;
    }

    /// Text for the progress line, built from `ui.time_fields`.
    pub fn time_text(&self, ui: &UiSettings) -> String {
        let progress = self.track.progress();
        let duration = self.track.duration().filter(|d| d.is_finite() && *d > 0.0);

        let mut parts: Vec<String> = Vec::new();
        for f in &ui.time_fields {
            match f {
                TimeField::Elapsed => parts.push(format_time(progress)),
                TimeField::Total => {
                    if let Some(total) = duration {
                        parts.push(format_time(total));
                    }
                }
                TimeField::Remaining => {
                    if let Some(total) = duration {
                        let remaining = (total - progress).max(0.0);
                        parts.push(format!("-{}", format_time(remaining)));
                    }
                }
            }
        }
        parts.join(&ui.time_separator)
    }

    /// State label, with the error message when the track failed.
    pub fn state_text(&self) -> String {
        let state = self.playback();
        match (state, self.track.last_error()) {
            (PlaybackState::Failed, Some(err)) => format!("{}: {err}", state.label()),
            _ => state.label().to_string(),
        }
    }
}
