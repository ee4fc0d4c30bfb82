//! Single-track audio playback.
//!
//! A [`Track`] wraps one playable resource and tracks its playback state from
//! the events its [`MediaEngine`] reports. [`MediaTrack`] works with any
//! engine; [`DeviceEngine`] plays local files on the default output device.

pub mod app;
pub mod config;
pub mod engine;
pub mod environment;
pub mod runtime;
pub mod track;
pub mod ui;

pub use engine::{
    CanPlayType, DeviceEngine, DeviceFactory, EngineFactory, MediaEngine, MediaError,
    MediaErrorCode, MediaEvent, MediaEventKind, PreloadPolicy,
};
pub use track::{MediaTrack, Track, TrackError, format_time};
