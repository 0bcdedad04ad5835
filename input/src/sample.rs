//! Per-frame pointer samples, and the aggregation of window events into them.
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use log::debug;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::{ExternalEvent, ScreenPoint};

/// The state of the pointer in one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    /// The button went down in this frame.
    pub pressed: bool,
    /// The button is down in this frame, including the frame it was pressed in.
    pub held: bool,
    /// The button went up in this frame.
    pub released: bool,
    pub position: ScreenPoint,
    /// Time since the previous frame.
    pub delta_time: Duration,
}

impl PointerSample {
    /// A sample without any button activity.
    pub fn idle(position: ScreenPoint, delta_time: Duration) -> Self {
        Self {
            pressed: false,
            held: false,
            released: false,
            position,
            delta_time,
        }
    }
}

/// Aggregates window events of the primary button between frame ticks.
///
/// Button edges are reported one per frame. A press and a release that arrive in the same frame
/// therefore show up in two consecutive samples, a sample never reports both.
#[derive(Debug, Default)]
pub struct PointerSampler {
    position: Option<ScreenPoint>,
    pending_edges: VecDeque<ElementState>,
    /// The button state as reported by the most recent sample.
    held: bool,
    last_tick: Option<Instant>,
}

impl PointerSampler {
    pub const BUTTON: MouseButton = MouseButton::Left;

    /// Feeds one event, returns a sample if the event was a frame tick.
    ///
    /// `None` for a frame tick if the pointer has not reported a position yet.
    pub fn update(&mut self, event: &ExternalEvent) -> Option<PointerSample> {
        match *event {
            ExternalEvent::Window(ref event) => {
                self.window_event(event);
                None
            }
            ExternalEvent::FrameTick(now) => self.tick(now),
        }
    }

    pub fn window_event(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(ScreenPoint::new(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(button, state),
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, position: ScreenPoint) {
        self.position = Some(position);
    }

    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if button != Self::BUTTON {
            return;
        }
        // Without a position, a press can not start a drag.
        if self.position.is_none() {
            debug!("Ignoring {state:?} of {button:?}, pointer position is not known yet");
            return;
        }
        self.pending_edges.push_back(state);
    }

    pub fn tick(&mut self, now: Instant) -> Option<PointerSample> {
        let delta_time = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);

        let position = self.position?;
        let mut sample = PointerSample::idle(position, delta_time);

        // Edges that do not change the state (a release we never saw the press of, for example)
        // are skipped.
        while let Some(edge) = self.pending_edges.pop_front() {
            let pressed = edge == ElementState::Pressed;
            if pressed != self.held {
                self.held = pressed;
                sample.pressed = pressed;
                sample.released = !pressed;
                break;
            }
        }

        sample.held = self.held;
        Some(sample)
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
