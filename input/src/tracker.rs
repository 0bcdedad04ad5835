//! The horizontal drag gesture state machine.
use log::{debug, warn};

use crate::{
    ControlSignal, GestureConfig, GestureEvent, HorizontalDrag, PointerSample, ScreenPoint,
    ScreenVector, smooth_damp,
};

/// Each drag delta is scaled by `horizontal_input_speed / DRAG_SCALE_DIVISOR`.
const DRAG_SCALE_DIVISOR: f64 = 10.0;

#[derive(Debug)]
pub struct DragGestureTracker {
    config: GestureConfig,

    input_enabled: bool,
    is_dragging: bool,
    has_ever_touched: bool,
    /// Scratch state of the smoothing branch.
    smoothed_velocity: f64,
    horizontal_value: f64,
    last_pointer_position: Option<ScreenPoint>,
}

impl DragGestureTracker {
    /// Creates a tracker with input disabled. Input begins with [`ControlSignal::EnableInput`].
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            input_enabled: false,
            is_dragging: false,
            has_ever_touched: false,
            smoothed_velocity: 0.0,
            horizontal_value: 0.0,
            last_pointer_position: None,
        }
    }

    pub fn handle_signal(&mut self, signal: ControlSignal) {
        debug!("Gesture control signal: {signal:?}");
        match signal {
            ControlSignal::EnableInput => self.on_enable_input(),
            ControlSignal::DisableInput => self.on_disable_input(),
            ControlSignal::Reset => self.on_reset(),
        }
    }

    pub fn on_enable_input(&mut self) {
        self.input_enabled = true;
    }

    /// Pauses input processing.
    ///
    /// A running drag is not ended, after re-enabling input it continues from the last position
    /// seen before.
    pub fn on_disable_input(&mut self) {
        self.input_enabled = false;
    }

    /// Disables input and ends a running drag.
    ///
    /// The first-touch state and the last pointer position survive a reset.
    pub fn on_reset(&mut self) {
        self.input_enabled = false;
        self.is_dragging = false;
    }

    /// Processes the pointer state of one frame and returns the detected gesture events in order.
    ///
    /// Nothing happens while input is disabled or the pointer is over UI.
    pub fn process_frame(
        &mut self,
        sample: &PointerSample,
        is_over_ui: bool,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        if !self.input_enabled || is_over_ui {
            return events;
        }

        if sample.released {
            self.is_dragging = false;
            events.push(GestureEvent::InputReleased);
        }

        if sample.pressed {
            self.is_dragging = true;
            events.push(GestureEvent::InputTaken);
            if !self.has_ever_touched {
                self.has_ever_touched = true;
                events.push(GestureEvent::FirstTimeTouchTaken);
            }
            self.last_pointer_position = Some(sample.position);
        }

        if sample.held && self.is_dragging {
            if let Some(drag) = self.drag(sample) {
                events.push(GestureEvent::InputDragged(drag));
            }
        }

        events
    }

    fn drag(&mut self, sample: &PointerSample) -> Option<HorizontalDrag> {
        let Some(last_position) = self.last_pointer_position else {
            warn!("Pointer held while dragging, but no previous position was recorded");
            return None;
        };

        let delta: ScreenVector = sample.position - last_position;
        let speed = self.config.horizontal_input_speed();

        // The two scaling branches are not mirror images of each other, and the smoothing
        // branch starts from the negated value. Observable output depends on both.
        self.horizontal_value = if -delta.x > speed {
            speed / DRAG_SCALE_DIVISOR * delta.x
        } else if delta.x < speed {
            -speed / DRAG_SCALE_DIVISOR * delta.x
        } else {
            // The accumulator is mirrored together with the value it belongs to.
            let mut velocity = -self.smoothed_velocity;
            let value = smooth_damp(
                -self.horizontal_value,
                0.0,
                &mut velocity,
                self.config.clamp_speed(),
                sample.delta_time,
            );
            self.smoothed_velocity = velocity;
            value
        };

        self.last_pointer_position = Some(sample.position);

        Some(HorizontalDrag::new(
            self.horizontal_value,
            self.config.clamp_values(),
        ))
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn has_ever_touched(&self) -> bool {
        self.has_ever_touched
    }

    /// The most recent horizontal displacement. Only meaningful while dragging.
    pub fn horizontal_value(&self) -> f64 {
        self.horizontal_value
    }

    pub fn last_pointer_position(&self) -> Option<ScreenPoint> {
        self.last_pointer_position
    }
}
