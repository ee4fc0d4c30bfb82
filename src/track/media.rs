use crate::engine::{
    CanPlayType, EngineFactory, ListenerId, MediaEngine, MediaError, MediaEvent, MediaEventKind,
    PreloadPolicy,
};

use super::Track;
use super::error::TrackError;
use super::time::completed_fraction;

/// Listener handles registered on the current engine instance.
struct Bindings {
    time_update: Option<ListenerId>,
    others: Vec<ListenerId>,
}

impl Bindings {
    fn bind(engine: &mut impl MediaEngine) -> Self {
        let time_update = Some(engine.add_listener(MediaEventKind::TimeUpdate));
        let others = MediaEventKind::ALL
            .into_iter()
            .filter(|kind| *kind != MediaEventKind::TimeUpdate)
            .map(|kind| engine.add_listener(kind))
            .collect();
        Self {
            time_update,
            others,
        }
    }

    fn unbind_time_update(&mut self, engine: &mut impl MediaEngine) {
        if let Some(id) = self.time_update.take() {
            engine.remove_listener(id);
        }
    }

    fn release(mut self, engine: &mut impl MediaEngine) {
        self.unbind_time_update(engine);
        for id in self.others.drain(..) {
            engine.remove_listener(id);
        }
    }
}

/// A track over any engine produced by `F`.
///
/// The engine is created at construction, released by `stop`/`destroy`, and
/// recreated by the next `play`.
pub struct MediaTrack<F: EngineFactory> {
    id: Option<u32>,
    source: String,
    preload: PreloadPolicy,
    factory: F,
    engine: Option<F::Engine>,
    bindings: Option<Bindings>,

    is_playing: bool,
    is_finished: bool,
    is_loading: bool,
    has_loaded: bool,
    duration: Option<f64>,
    progress: f64,
    completed: f64,
    last_error: Option<MediaError>,
}

impl<F: EngineFactory> MediaTrack<F> {
    pub fn new(source: impl Into<String>, preload: PreloadPolicy, factory: F) -> Self {
        let mut track = Self {
            id: None,
            source: source.into(),
            preload,
            factory,
            engine: None,
            bindings: None,
            is_playing: false,
            is_finished: false,
            is_loading: false,
            has_loaded: false,
            duration: None,
            progress: 0.0,
            completed: 0.0,
            last_error: None,
        };
        track.create_engine();
        track
    }

    /// The live engine, if the track has not been stopped or destroyed.
    pub fn engine(&self) -> Option<&F::Engine> {
        self.engine.as_ref()
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> Option<&mut F::Engine> {
        self.engine.as_mut()
    }

    fn create_engine(&mut self) {
        let mut engine = self.factory.create(&self.source, self.preload);
        self.bindings = Some(Bindings::bind(&mut engine));
        self.engine = Some(engine);
        log::debug!("created engine for track {}", self.source);
    }

    fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate => self.on_time_update(),
            MediaEvent::Error(err) => {
                log::warn!("track {} failed: {err}", self.source);
                self.last_error = Some(err);
                self.is_playing = false;
            }
            MediaEvent::CanPlay => {
                log::info!("loaded track {}", self.source);
                self.is_loading = false;
                self.has_loaded = true;
            }
            MediaEvent::Playing => {
                log::info!("playing track {}", self.source);
                self.is_finished = false;
                self.is_playing = true;
            }
            MediaEvent::Ended => {
                log::info!("finished track {}", self.source);
                self.is_playing = false;
                self.is_finished = true;
            }
            MediaEvent::DurationChange(duration) => self.duration = Some(duration),
        }
    }

    fn on_time_update(&mut self) {
        if !self.is_playing {
            return;
        }
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        let position = engine.current_time();
        if position > 0.0 {
            self.progress = position;
            self.completed = completed_fraction(position, engine.duration());
        }
    }
}

impl<F: EngineFactory> Track for MediaTrack<F> {
    fn id(&self) -> Option<u32> {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = Some(id);
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn preload(&self) -> PreloadPolicy {
        self.preload
    }

    fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn is_finished(&self) -> bool {
        self.is_finished
    }

    fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn progress(&self) -> f64 {
        self.progress
    }

    fn completed_fraction(&self) -> f64 {
        self.completed
    }

    fn last_error(&self) -> Option<&MediaError> {
        self.last_error.as_ref()
    }

    fn can_play_current_format(&self) -> bool {
        let Some(engine) = self.engine.as_ref() else {
            return false;
        };
        engine.can_play_type(&format_mime(&self.source)) != CanPlayType::No
    }

    fn play(&mut self) {
        if self.engine.is_none() {
            self.create_engine();
        }
        if !self.has_loaded {
            log::debug!("loading track {}", self.source);
            self.is_loading = true;
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.play();
        }
    }

    fn pause(&mut self) {
        if !self.is_playing {
            return;
        }
        log::debug!("pausing track {}", self.source);
        if let Some(engine) = self.engine.as_mut() {
            engine.pause();
        }
        self.is_playing = false;
    }

    fn stop(&mut self) {
        if self.engine.is_none() {
            return;
        }
        self.pause();
        if let (Some(engine), Some(bindings)) = (self.engine.as_mut(), self.bindings.as_mut()) {
            bindings.unbind_time_update(engine);
        }
        self.is_finished = true;
        self.is_loading = false;
        self.destroy();
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), TrackError> {
        let Some(engine) = self.engine.as_mut() else {
            return Err(TrackError::InvalidState {
                operation: "seek",
                track: self.source.clone(),
            });
        };
        engine.set_current_time(seconds);
        Ok(())
    }

    fn destroy(&mut self) {
        let Some(mut engine) = self.engine.take() else {
            return;
        };
        if let Some(bindings) = self.bindings.take() {
            bindings.release(&mut engine);
        }
        drop(engine);
        log::debug!("released track {}", self.source);
    }

    fn dispatch_events(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        for event in engine.drain_events() {
            self.apply(event);
        }
    }
}

/// MIME-like format guessed from the source's file extension, e.g.
/// `audio/mp3` for `https://host/song.mp3?x=1`. Empty subtype when the
/// source has no extension.
pub fn format_mime(source: &str) -> String {
    let path = source.split(['?', '#']).next().unwrap_or_default();
    let name = path.rsplit('/').next().unwrap_or_default();
    let ext = match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => "",
    };
    format!("audio/{}", ext.to_ascii_lowercase())
}
