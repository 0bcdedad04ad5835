//! Horizontal drag gesture detection for a frame driven host loop.
//!
//! Window events are aggregated into one [`PointerSample`] per frame by the [`PointerSampler`].
//! The [`DragGestureTracker`] turns these samples into [`GestureEvent`]s, and [`GestureInput`]
//! connects it to the host's control signals, UI hit testing and event subscribers.
mod config;
mod event;
mod external_event;
mod gesture_input;
mod sample;
mod sink;
mod smooth_damp;
mod tracker;

pub use config::*;
pub use event::*;
pub use external_event::*;
pub use gesture_input::*;
pub use sample::*;
pub use sink::*;
pub use smooth_damp::*;
pub use tracker::*;

/// Physical window coordinates as reported by the windowing system.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSpace;
pub type ScreenPoint = euclid::Point2D<f64, ScreenSpace>;
pub type ScreenVector = euclid::Vector2D<f64, ScreenSpace>;
