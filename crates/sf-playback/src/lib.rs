//! Story playback and navigation engine for Storyfeed.
//!
//! A [`PlaybackController`] plays a read-only [`sf_core::StoryCollection`] as a
//! timed carousel: progress fills on a fixed cadence, a full bar advances to
//! the next story (crossing author groups), and the viewer closes once the
//! last story ends. Timing comes from an injected [`Clock`], so hosts can run
//! on wall-clock time and tests on a [`ManualClock`].

/// Time sources the controller reads.
pub mod clock;
/// Configuration for playback cadence and input zones.
pub mod config;
/// The playback controller: the single owner of playback state.
pub mod controller;
/// Error types for the playback crate.
pub mod error;
/// Playback event types and the event log.
pub mod event;
/// Mapping of pointer and touch input to playback commands.
pub mod input;
/// Pure position transitions across story and group boundaries.
pub mod navigation;
/// Position, playback state, and lifecycle phase.
pub mod position;
/// Per-story progress bar fill derived from playback state.
pub mod progress;
/// The single-epoch timer slot.
pub mod timer;

/// Re-exports of [`clock::Clock`], [`clock::ManualClock`], and [`clock::SystemClock`].
pub use clock::{Clock, ManualClock, SystemClock};
/// Re-exports of [`config::DEFAULT_MAX_EVENTS`] and [`config::PlaybackConfig`].
pub use config::{DEFAULT_MAX_EVENTS, PlaybackConfig};
/// Re-export of [`controller::PlaybackController`].
pub use controller::PlaybackController;
/// Re-exports of [`error::PlaybackError`] and [`error::PlaybackResult`].
pub use error::{PlaybackError, PlaybackResult};
/// Re-exports of [`event::EventLog`], [`event::PlaybackEvent`], and [`event::PlaybackEventKind`].
pub use event::{EventLog, PlaybackEvent, PlaybackEventKind};
/// Re-exports of [`input::Command`], [`input::InputEvent`], and [`input::InputMediator`].
pub use input::{Command, InputEvent, InputMediator};
/// Re-exports of [`navigation::CollectionShape`], [`navigation::Direction`], and [`navigation::Step`].
pub use navigation::{CollectionShape, Direction, Step};
/// Re-exports of [`position::CloseReason`], [`position::Phase`], [`position::PlaybackState`], and [`position::Position`].
pub use position::{CloseReason, Phase, PlaybackState, Position};
/// Re-exports of [`progress::Fill`] and [`progress::ProgressProjection`].
pub use progress::{Fill, ProgressProjection};
/// Re-exports of [`timer::Firing`], [`timer::TimerId`], and [`timer::TimerSlot`].
pub use timer::{Firing, TimerId, TimerSlot};
