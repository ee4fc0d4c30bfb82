//! A deterministic engine for tests: transport calls are recorded and events
//! are injected by hand.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::event::{MediaEvent, MediaEventKind};
use super::listeners::{ListenerId, Listeners};
use super::types::{CanPlayType, MediaError, PreloadPolicy};
use super::{EngineFactory, MediaEngine};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Play,
    Pause,
    Seek(f64),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedFactory {
    created: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
    history: Rc<RefCell<Vec<Call>>>,
    inbox: Rc<RefCell<VecDeque<MediaEvent>>>,
    supported: Vec<&'static str>,
}

impl ScriptedFactory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `Probably` for `mime`, `No` for everything else.
    pub(crate) fn supporting(mut self, mime: &'static str) -> Self {
        self.supported.push(mime);
        self
    }

    pub(crate) fn created(&self) -> usize {
        self.created.get()
    }

    pub(crate) fn released(&self) -> usize {
        self.released.get()
    }

    /// Transport calls made on every engine this factory created.
    pub(crate) fn history(&self) -> Vec<Call> {
        self.history.borrow().clone()
    }

    /// Queue `event` for whichever engine drains next. Reaches an engine
    /// that is already owned by a boxed track.
    pub(crate) fn emit(&self, event: MediaEvent) {
        self.inbox.borrow_mut().push_back(event);
    }
}

impl EngineFactory for ScriptedFactory {
    type Engine = ScriptedEngine;

    fn create(&self, source: &str, preload: PreloadPolicy) -> ScriptedEngine {
        self.created.set(self.created.get() + 1);
        ScriptedEngine {
            source: source.to_string(),
            preload,
            position: 0.0,
            duration: None,
            error: None,
            listeners: Listeners::new(),
            queue: VecDeque::new(),
            calls: Vec::new(),
            supported: self.supported.clone(),
            released: Rc::clone(&self.released),
            history: Rc::clone(&self.history),
            inbox: Rc::clone(&self.inbox),
        }
    }
}

pub(crate) struct ScriptedEngine {
    source: String,
    preload: PreloadPolicy,
    position: f64,
    duration: Option<f64>,
    error: Option<MediaError>,
    listeners: Listeners,
    queue: VecDeque<MediaEvent>,
    calls: Vec<Call>,
    supported: Vec<&'static str>,
    released: Rc<Cell<usize>>,
    history: Rc<RefCell<Vec<Call>>>,
    inbox: Rc<RefCell<VecDeque<MediaEvent>>>,
}

impl ScriptedEngine {
    /// Queue `event`, updating the engine's own properties the way a real
    /// backend would before raising it.
    pub(crate) fn emit(&mut self, event: MediaEvent) {
        match &event {
            MediaEvent::Error(err) => self.error = Some(err.clone()),
            MediaEvent::DurationChange(duration) => self.duration = Some(*duration),
            _ => {}
        }
        self.queue.push_back(event);
    }

    /// Move the position and queue a time update, as playback would.
    pub(crate) fn advance_to(&mut self, seconds: f64) {
        self.position = seconds;
        self.queue.push_back(MediaEvent::TimeUpdate);
    }

    fn record(&mut self, call: Call) {
        self.history.borrow_mut().push(call.clone());
        self.calls.push(call);
    }

    pub(crate) fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn is_bound(&self, kind: MediaEventKind) -> bool {
        self.listeners.is_bound(kind)
    }
}

impl MediaEngine for ScriptedEngine {
    fn source(&self) -> &str {
        &self.source
    }

    fn preload(&self) -> PreloadPolicy {
        self.preload
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.record(Call::Seek(seconds));
        self.position = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn error(&self) -> Option<&MediaError> {
        self.error.as_ref()
    }

    fn play(&mut self) {
        self.record(Call::Play);
    }

    fn pause(&mut self) {
        self.record(Call::Pause);
    }

    fn can_play_type(&self, mime: &str) -> CanPlayType {
        if self.supported.iter().any(|supported| *supported == mime) {
            CanPlayType::Probably
        } else {
            CanPlayType::No
        }
    }

    fn add_listener(&mut self, kind: MediaEventKind) -> ListenerId {
        self.listeners.add(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        let injected: Vec<MediaEvent> = self.inbox.borrow_mut().drain(..).collect();
        for event in injected {
            self.emit(event);
        }
        self.listeners.deliver(&mut self.queue)
    }
}

impl Drop for ScriptedEngine {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}
