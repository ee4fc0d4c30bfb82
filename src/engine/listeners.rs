//! Listener bookkeeping shared by engine implementations.

use std::collections::VecDeque;

use super::event::{MediaEvent, MediaEventKind};

/// Stable handle for one registered listener.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The listeners registered on one engine instance.
#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    bound: Vec<(ListenerId, MediaEventKind)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: MediaEventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.bound.push((id, kind));
        id
    }

    /// Returns `false` if `id` is unknown or was already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.bound.iter().position(|(bound, _)| *bound == id) {
            Some(pos) => {
                self.bound.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn is_bound(&self, kind: MediaEventKind) -> bool {
        self.bound.iter().any(|(_, k)| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Empty `queue`, keeping only events someone listens to.
    pub fn deliver(&self, queue: &mut VecDeque<MediaEvent>) -> Vec<MediaEvent> {
        queue
            .drain(..)
            .filter(|event| self.is_bound(event.kind()))
            .collect()
    }
}
