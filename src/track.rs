//! Playback-state tracking for a single audio resource.
//!
//! A track wraps one engine, forwards transport calls to it and derives its
//! observable state (playing, finished, loading, progress) from the events
//! the engine reports. Failures never surface from the transport calls; they
//! show up as `last_error` with `is_playing` cleared.

mod error;
mod media;
mod time;


pub use error::TrackError;
pub use media::{MediaTrack, format_mime};
pub use time::{format_time, truncate2};

use crate::engine::{MediaError, PreloadPolicy};

/// Transport controls and observable state shared by every track backend.
pub trait Track {
    /// Externally assigned identifier; the track does not enforce uniqueness.
    fn id(&self) -> Option<u32>;
    fn set_id(&mut self, id: u32);

    fn source(&self) -> &str;
    fn preload(&self) -> PreloadPolicy;

    fn is_playing(&self) -> bool;
    fn is_finished(&self) -> bool;
    fn is_loading(&self) -> bool;
    fn has_loaded(&self) -> bool;

    /// Length in seconds, `None` until the engine reports it.
    fn duration(&self) -> Option<f64>;
    /// Seconds elapsed, as of the last time update seen while playing.
    fn progress(&self) -> f64;
    /// `progress / duration` truncated to two decimals, in `[0, 1]`.
    fn completed_fraction(&self) -> f64;
    fn last_error(&self) -> Option<&MediaError>;
    /// Advisory: `true` does not guarantee playback will succeed.
    fn can_play_current_format(&self) -> bool;

    fn play(&mut self);
    fn pause(&mut self);
    /// Pause, mark finished and release the engine.
    fn stop(&mut self);
    fn seek_to(&mut self, seconds: f64) -> Result<(), TrackError>;
    /// Release the engine without touching the playback flags.
    fn destroy(&mut self);

    /// Apply every event the engine has queued since the last call.
    fn dispatch_events(&mut self);
}
