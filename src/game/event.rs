//! Event System
//!
//! The puzzle state machine reports every transition as a `GameEvent`.
//! The runtime drains the queue once per frame and logs it; tests read it
//! to check what happened without parsing prompt text.

use crate::world::{ItemId, PropId};

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Puzzle transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A terminal accepted its code and unlocked `target`
    CodeAccepted { terminal: PropId, target: PropId },
    /// Wrong code typed into a terminal
    CodeRejected { terminal: PropId },
    /// A container was opened for the first time
    ContainerOpened { container: PropId },
    /// An item went into the inventory
    ItemCollected { item: ItemId },
    /// An inner door swung open
    DoorOpened { door: PropId },
    /// A door refused to open
    DoorLocked { door: PropId },
    /// The player went through an exit door
    Escaped { door: PropId },
}
