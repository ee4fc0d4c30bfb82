//! Playback engines: the media backends a track delegates transport to.
//!
//! An engine owns one playable resource. It never calls back into its owner;
//! instead it queues `MediaEvent`s and hands them over when the owner calls
//! `drain_events` from its event loop. Only events with a registered listener
//! are handed over.

mod device;
mod error;
mod event;
mod listeners;
mod probe;
mod sink;
mod types;

#[cfg(test)]
pub(crate) mod scripted;

#[cfg(test)]
mod tests;

pub use device::{DeviceEngine, DeviceFactory};
pub use error::EngineError;
pub use event::{MediaEvent, MediaEventKind};
pub use listeners::{ListenerId, Listeners};
pub use types::{CanPlayType, MediaError, MediaErrorCode, PreloadPolicy};

/// The media backend behind a track.
pub trait MediaEngine {
    /// The source this engine was created for.
    fn source(&self) -> &str;

    fn preload(&self) -> PreloadPolicy;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Move the playback position. Out-of-range handling is up to the engine.
    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds, `None` until known.
    fn duration(&self) -> Option<f64>;

    /// The most recent error raised by this engine, if any.
    fn error(&self) -> Option<&MediaError>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Codec support for a MIME-like string such as `audio/mp3`.
    fn can_play_type(&self, mime: &str) -> CanPlayType;

    /// Subscribe to one kind of event. The returned handle stays valid until
    /// it is removed or the engine is dropped.
    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId;

    /// Remove a handle returned by `add_listener`. Returns `false` when the
    /// handle was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;

    /// Hand over every queued event that has a listener, oldest first.
    fn drain_events(&mut self) -> Vec<MediaEvent>;
}

/// Builds engines for a source, so a track can recreate its engine after
/// it was destroyed.
pub trait EngineFactory {
    type Engine: MediaEngine;

    fn create(&self, source: &str, preload: PreloadPolicy) -> Self::Engine;
}
