//! Engine backed by the local audio device through `rodio`.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::Sink;
use rodio::mixer::Mixer;

use crate::environment;

use super::error::EngineError;
use super::event::{MediaEvent, MediaEventKind};
use super::listeners::{ListenerId, Listeners};
use super::probe::probe_duration;
use super::sink::open_sink_at;
use super::types::{CanPlayType, MediaError, PreloadPolicy};
use super::{EngineFactory, MediaEngine};

/// Creates `DeviceEngine`s that all play into the same output mixer.
#[derive(Clone)]
pub struct DeviceFactory {
    mixer: Mixer,
}

impl DeviceFactory {
    pub fn new(mixer: Mixer) -> Self {
        Self { mixer }
    }
}

impl EngineFactory for DeviceFactory {
    type Engine = DeviceEngine;

    fn create(&self, source: &str, preload: PreloadPolicy) -> DeviceEngine {
        DeviceEngine::new(source, preload, self.mixer.clone())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Ready,
    Playing,
    Paused,
    Ended,
    Failed,
}

/// Plays a local file (plain path or `file://` URL) on the output device.
pub struct DeviceEngine {
    source: String,
    path: Option<PathBuf>,
    preload: PreloadPolicy,
    mixer: Mixer,
    sink: Option<Sink>,
    phase: Phase,
    duration: Option<f64>,
    error: Option<MediaError>,
    // Position the current sink was opened at; `Sink::get_pos` counts from here.
    base: Duration,
    pending_seek: Option<Duration>,
    last_pos: Duration,
    listeners: Listeners,
    queue: VecDeque<MediaEvent>,
}

impl DeviceEngine {
    pub fn new(source: &str, preload: PreloadPolicy, mixer: Mixer) -> Self {
        let mut engine = Self {
            source: source.to_string(),
            path: resolve_path(source),
            preload,
            mixer,
            sink: None,
            phase: Phase::Idle,
            duration: None,
            error: None,
            base: Duration::ZERO,
            pending_seek: None,
            last_pos: Duration::ZERO,
            listeners: Listeners::new(),
            queue: VecDeque::new(),
        };

        match preload {
            PreloadPolicy::None => {}
            PreloadPolicy::Metadata => engine.load_metadata(),
            PreloadPolicy::Auto => {
                engine.load();
            }
        }
        log::debug!("device engine created for {source} (preload {preload})");
        engine
    }

    fn load_metadata(&mut self) {
        if self.duration.is_some() {
            return;
        }
        if let Some(duration) = self.path.as_deref().and_then(probe_duration) {
            self.set_duration(duration);
        }
    }

    /// Open and decode the resource. Returns `false` when it failed; the
    /// failure is queued as an error event.
    fn load(&mut self) -> bool {
        if self.sink.is_some() {
            return true;
        }
        let Some(path) = self.path.clone() else {
            self.fail(EngineError::UnsupportedSource(self.source.clone()));
            return false;
        };

        let start_at = self.pending_seek.take().unwrap_or_default();
        match open_sink_at(&self.mixer, &path, start_at) {
            Ok(opened) => {
                self.sink = Some(opened.sink);
                self.base = start_at;
                self.last_pos = start_at;
                self.error = None;
                if let Some(duration) = opened.total_duration.or_else(|| probe_duration(&path)) {
                    self.set_duration(duration);
                }
                self.phase = Phase::Ready;
                self.queue.push_back(MediaEvent::CanPlay);
                log::debug!("device engine loaded {}", path.display());
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    /// Replace the sink with a fresh one opened at `position`.
    fn rebuild_at(&mut self, position: Duration) -> bool {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        let Some(path) = self.path.clone() else {
            self.fail(EngineError::UnsupportedSource(self.source.clone()));
            return false;
        };
        match open_sink_at(&self.mixer, &path, position) {
            Ok(opened) => {
                if self.phase == Phase::Playing {
                    opened.sink.play();
                }
                self.sink = Some(opened.sink);
                self.base = position;
                self.last_pos = position;
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    fn set_duration(&mut self, duration: Duration) {
        let seconds = duration.as_secs_f64();
        if self.duration != Some(seconds) {
            self.duration = Some(seconds);
            self.queue.push_back(MediaEvent::DurationChange(seconds));
        }
    }

    fn fail(&mut self, err: EngineError) {
        log::warn!("device engine error for {}: {err}", self.source);
        let err = MediaError::from(err);
        self.phase = Phase::Failed;
        self.error = Some(err.clone());
        self.queue.push_back(MediaEvent::Error(err));
    }

    fn position(&self) -> Duration {
        match &self.sink {
            Some(sink) => self.base + sink.get_pos(),
            None => self.pending_seek.unwrap_or_default(),
        }
    }

    /// Turn the sink's progress into events.
    fn poll_sink(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(sink) = &self.sink else {
            return;
        };
        if sink.empty() {
            self.phase = Phase::Ended;
            self.queue.push_back(MediaEvent::Ended);
            log::debug!("device engine reached the end of {}", self.source);
            return;
        }
        let pos = self.position();
        if pos != self.last_pos {
            self.last_pos = pos;
            self.queue.push_back(MediaEvent::TimeUpdate);
        }
    }
}

impl MediaEngine for DeviceEngine {
    fn source(&self) -> &str {
        &self.source
    }

    fn preload(&self) -> PreloadPolicy {
        self.preload
    }

    fn current_time(&self) -> f64 {
        self.position().as_secs_f64()
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            log::warn!("ignoring seek to {seconds} on {}", self.source);
            return;
        }
        let mut seconds = seconds.max(0.0);
        if let Some(duration) = self.duration {
            seconds = seconds.min(duration);
        }
        let target = Duration::from_secs_f64(seconds);

        let Some(sink) = &self.sink else {
            self.pending_seek = Some(target);
            self.queue.push_back(MediaEvent::TimeUpdate);
            return;
        };

        let seeked = self.phase != Phase::Ended && sink.try_seek(target).is_ok();
        if seeked {
            // `try_seek` moves `get_pos` to the absolute target.
            self.base = Duration::ZERO;
            self.last_pos = target;
        } else {
            log::debug!("seek on {} rebuilds the sink at {seconds:.2}s", self.source);
            if !self.rebuild_at(target) {
                return;
            }
        }
        if self.phase == Phase::Ended {
            self.phase = Phase::Paused;
        }
        self.queue.push_back(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn error(&self) -> Option<&MediaError> {
        self.error.as_ref()
    }

    fn play(&mut self) {
        if self.sink.is_none() && !self.load() {
            return;
        }
        if self.phase == Phase::Ended && !self.rebuild_at(Duration::ZERO) {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.play();
        }
        if self.phase != Phase::Playing {
            self.phase = Phase::Playing;
            self.queue.push_back(MediaEvent::Playing);
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
    }

    fn can_play_type(&self, mime: &str) -> CanPlayType {
        environment::capabilities().can_play_type(mime)
    }

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        self.listeners.add(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.poll_sink();
        self.listeners.deliver(&mut self.queue)
    }
}

impl Drop for DeviceEngine {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        log::debug!("device engine released for {}", self.source);
    }
}

/// Map a source string to a local path. Other URL schemes are not playable
/// by this engine.
pub(super) fn resolve_path(source: &str) -> Option<PathBuf> {
    if let Some(rest) = source.strip_prefix("file://") {
        return Some(Path::new(rest).to_path_buf());
    }
    if source.contains("://") {
        return None;
    }
    Some(PathBuf::from(source))
}
