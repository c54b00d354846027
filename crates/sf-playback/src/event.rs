use std::fmt;
use std::time::Duration;

use crate::navigation::Direction;
use crate::position::{CloseReason, Position};

/// What happened during playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEventKind {
    /// The viewer opened on a story.
    Opened {
        /// The start position after clamping.
        at: Position,
    },
    /// A story ran to completion and playback moved on.
    Advanced {
        /// The finished story.
        from: Position,
        /// The story now playing.
        to: Position,
    },
    /// The user skipped to another story.
    Navigated {
        /// The story that was showing.
        from: Position,
        /// The story now showing.
        to: Position,
        /// Which way the user went.
        direction: Direction,
    },
    /// The user asked to go back from the very first story.
    Stayed {
        /// The position that was kept.
        at: Position,
    },
    /// Playback was held.
    Paused {
        /// Where playback was held.
        at: Position,
        /// Progress at the moment of holding.
        progress: f32,
    },
    /// Playback was released.
    Resumed {
        /// Where playback continues.
        at: Position,
        /// Progress playback continues from.
        progress: f32,
    },
    /// The viewer closed.
    Closed {
        /// Why it closed.
        reason: CloseReason,
    },
}

impl fmt::Display for PlaybackEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened { at } => write!(f, "opened at {at}"),
            Self::Advanced { from, to } => write!(f, "story {from} finished, playing {to}"),
            Self::Navigated {
                from,
                to,
                direction,
            } => {
                let way = match direction {
                    Direction::Forward => "forward",
                    Direction::Backward => "back",
                };
                write!(f, "skipped {way} from {from} to {to}")
            }
            Self::Stayed { at } => write!(f, "already at first story {at}"),
            Self::Paused { at, progress } => write!(f, "paused at {at} ({progress:.0}%)"),
            Self::Resumed { at, progress } => write!(f, "resumed at {at} ({progress:.0}%)"),
            Self::Closed { reason } => write!(f, "viewer closed: {reason}"),
        }
    }
}

/// A record of something that happened during playback.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackEvent {
    /// Monotonic sequence number, starting at 0.
    pub seq: u64,
    /// Clock time when it happened.
    pub at: Duration,
    /// The specific kind of event that occurred.
    pub kind: PlaybackEventKind,
}

/// Accumulates events during a viewer's lifetime.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<PlaybackEvent>,
    max_events: usize,
    next_seq: u64,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
            next_seq: 0,
        }
    }

    /// Record an event, dropping the oldest events if the log exceeds its capacity.
    pub fn record(&mut self, at: Duration, kind: PlaybackEventKind) {
        self.events.push(PlaybackEvent {
            seq: self.next_seq,
            at,
            kind,
        });
        self.next_seq += 1;
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all retained events.
    pub fn events(&self) -> &[PlaybackEvent] {
        &self.events
    }

    /// The most recent event.
    pub fn last(&self) -> Option<&PlaybackEvent> {
        self.events.last()
    }

    /// Return the number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return true if no events are retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total events ever recorded, including dropped ones.
    pub fn total_recorded(&self) -> u64 {
        self.next_seq
    }
}
