//! Bounded log of recent outbreak events.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What happened to a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutbreakEventKind {
    /// `target` caught the disease from `source`.
    Infection {
        /// Index of the infectious particle.
        source: usize,
        /// Index of the newly infected particle.
        target: usize,
    },
    /// `particle` finished its recovery period.
    Recovery {
        /// Index of the recovered particle.
        particle: usize,
    },
}

/// An event stamped with the tick it happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutbreakEvent {
    /// Simulation time of the event.
    pub time: u64,
    /// The event itself.
    pub kind: OutbreakEventKind,
}

/// Event log that keeps the most recent outbreak events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<OutbreakEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl EventLog {
    /// Creates an empty log holding at most `max_events` events
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Records an event, evicting the oldest ones beyond capacity
    pub fn log(&mut self, time: u64, kind: OutbreakEventKind) {
        if self.max_events == 0 {
            return;
        }
        self.events.push_front(OutbreakEvent { time, kind });
        self.events.truncate(self.max_events);
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<OutbreakEvent> {
        &self.events
    }
}
