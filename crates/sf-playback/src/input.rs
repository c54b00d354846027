//! Device input abstraction for the story surface.
//!
//! Mouse and touch are unified: anything that presses the surface holds
//! playback, and anything that ends the press (including the pointer
//! sliding off the surface) releases it. Taps near the edges navigate.

use crate::navigation::Direction;

/// Raw input on the story surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse button went down on the surface.
    PointerDown,
    /// A mouse button was released.
    PointerUp,
    /// The pointer left the surface, possibly while still pressed.
    PointerLeave,
    /// A finger touched the surface.
    TouchStart,
    /// A finger was lifted.
    TouchEnd,
    /// The platform aborted the touch.
    TouchCancel,
    /// A click or tap at horizontal offset `x` on a surface `width` wide.
    Tap {
        /// Offset from the left edge.
        x: f32,
        /// Width of the surface.
        width: f32,
    },
    /// The viewer's close control was activated.
    CloseButton,
}

/// What the controller should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hold playback.
    Pause,
    /// Release playback.
    Resume,
    /// Move to an adjacent story.
    Navigate(Direction),
    /// Close the viewer.
    Close,
}

/// Maps [`InputEvent`]s to [`Command`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputMediator {
    tap_zone: f32,
}

impl Default for InputMediator {
    fn default() -> Self {
        Self::new(1.0 / 3.0)
    }
}

impl InputMediator {
    /// Create a mediator whose navigation zones each span `tap_zone` of the width.
    pub fn new(tap_zone: f32) -> Self {
        Self { tap_zone }
    }

    /// Translate one event. Taps in the middle or outside the surface do nothing.
    pub fn map(&self, event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::PointerDown | InputEvent::TouchStart => Some(Command::Pause),
            InputEvent::PointerUp
            | InputEvent::PointerLeave
            | InputEvent::TouchEnd
            | InputEvent::TouchCancel => Some(Command::Resume),
            InputEvent::Tap { x, width } => self.tap(x, width).map(Command::Navigate),
            InputEvent::CloseButton => Some(Command::Close),
        }
    }

    fn tap(&self, x: f32, width: f32) -> Option<Direction> {
        if !(width.is_finite() && width > 0.0) || !(0.0..=width).contains(&x) {
            return None;
        }
        let zone = width * self.tap_zone;
        if x < zone {
            Some(Direction::Backward)
        } else if x >= width - zone {
            Some(Direction::Forward)
        } else {
            None
        }
    }
}
