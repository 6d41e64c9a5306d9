//! Input model: mouse buttons, gesture classification, and the gesture
//! state machine.
//!
//! `Gesture` decides what a press means before any state changes: the
//! primary button or a single touch draws, everything else pans.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying all context needed to extend the stroke or compute
//! incremental pan deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::PAN_TOUCH_COUNT;
use crate::history::Stroke;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// What a press means: paint a stroke, or move the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Draw,
    Pan,
}

impl Gesture {
    /// Classify a mouse press. The primary button draws; middle and
    /// secondary buttons are reserved for panning.
    #[must_use]
    pub fn from_button(button: Button) -> Self {
        match button {
            Button::Primary => Self::Draw,
            Button::Middle | Button::Secondary => Self::Pan,
        }
    }

    /// Classify a touch start by the number of simultaneous touches.
    /// One finger draws, two or more pan.
    #[must_use]
    pub fn from_touch_count(touches: u32) -> Self {
        if touches >= PAN_TOUCH_COUNT {
            Self::Pan
        } else {
            Self::Draw
        }
    }
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries its gesture context. A single machine owns
/// both gestures, so drawing while panning is unrepresentable.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A stroke is being painted.
    Drawing {
        /// The stroke under construction, committed to the log on release.
        stroke: Stroke,
    },
    /// The canvas is being dragged.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute the pan delta.
        last_screen: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
