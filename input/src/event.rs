use derive_more::Constructor;

use crate::ClampValues;

/// Gesture events published by the [`DragGestureTracker`](crate::DragGestureTracker).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureEvent {
    /// The pointer got pressed.
    InputTaken,
    /// The pointer got released.
    InputReleased,
    /// The very first press the tracker has seen. Published right after [`Self::InputTaken`].
    FirstTimeTouchTaken,
    /// The pointer is held and was moved (or not) since the previous frame.
    InputDragged(HorizontalDrag),
}

#[derive(Debug, Copy, Clone, PartialEq, Constructor)]
pub struct HorizontalDrag {
    /// The current horizontal displacement.
    pub horizontal_value: f64,
    /// The bounds the consumer is expected to clamp its own state to.
    pub clamp_values: ClampValues,
}

/// Signals that control the tracker. These are consumed, not published.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlSignal {
    EnableInput,
    DisableInput,
    /// The host's state was reset. Disables input and ends a running drag.
    Reset,
}
