use std::fmt;

use crate::navigation::CollectionShape;

/// Which story is on screen: a story index within an author group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Index of the author group.
    pub group: usize,
    /// Index of the story within that group.
    pub story: usize,
}

impl Position {
    /// The first story of the first group.
    pub const ORIGIN: Self = Self { group: 0, story: 0 };

    /// Create a position.
    pub const fn new(group: usize, story: usize) -> Self {
        Self { group, story }
    }

    /// Whether both indices address an existing story in `shape`.
    pub fn is_valid_in<S: CollectionShape + ?Sized>(&self, shape: &S) -> bool {
        self.group < shape.group_count() && self.story < shape.stories_in_group(self.group)
    }

    /// Normalize a caller-supplied start position.
    ///
    /// A missing or out-of-range position becomes [`Position::ORIGIN`].
    pub fn clamp<S: CollectionShape + ?Sized>(initial: Option<Self>, shape: &S) -> Self {
        match initial {
            Some(position) if position.is_valid_in(shape) => position,
            _ => Self::ORIGIN,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.group, self.story)
    }
}

/// Live playback state. Replaced as one value so position and progress never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// The story on screen.
    pub position: Position,
    /// Ticks applied to the current story since it was entered.
    pub ticks: u32,
    /// Percentage of the current story elapsed, within `0.0..=100.0`.
    /// Derived from `ticks`, never accumulated.
    pub progress: f32,
    /// Whether the user is holding playback.
    pub paused: bool,
}

impl PlaybackState {
    /// Fresh state at `position`: no progress, playing.
    pub fn at(position: Position) -> Self {
        Self {
            position,
            ticks: 0,
            progress: 0.0,
            paused: false,
        }
    }
}

/// Why the viewer closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The last story of the last group finished or was skipped.
    Exhausted,
    /// The host or user closed the viewer.
    Explicit,
    /// There was nothing to play at the start position.
    EmptyCollection,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "exhausted"),
            Self::Explicit => write!(f, "closed"),
            Self::EmptyCollection => write!(f, "empty collection"),
        }
    }
}

/// Lifecycle of a viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Showing a story.
    Playing(PlaybackState),
    /// Terminal. No further state changes.
    Closed(CloseReason),
}
