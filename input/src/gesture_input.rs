use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    ControlSignal, DragGestureTracker, GestureConfig, GestureSink, PointerSample, UiOcclusion,
};

pub type SignalSender = UnboundedSender<ControlSignal>;

/// Connects a [`DragGestureTracker`] to its host: control signals in, gesture events out.
///
/// Dropping it unsubscribes from the control signals.
#[derive(Debug)]
pub struct GestureInput<S, O> {
    tracker: DragGestureTracker,
    sink: S,
    occlusion: O,
    signals: UnboundedReceiver<ControlSignal>,
}

impl<S: GestureSink, O: UiOcclusion> GestureInput<S, O> {
    /// Returns the input and the sender through which the host controls it.
    pub fn new(config: GestureConfig, sink: S, occlusion: O) -> (Self, SignalSender) {
        let (sender, signals) = mpsc::unbounded_channel();
        let input = Self {
            tracker: DragGestureTracker::new(config),
            sink,
            occlusion,
            signals,
        };
        (input, sender)
    }

    /// Processes one frame and returns the number of events published.
    ///
    /// Control signals sent before are applied first, in the order they were sent.
    pub fn frame(&mut self, sample: &PointerSample) -> usize {
        self.apply_signals();

        let is_over_ui = self.occlusion.is_pointer_over_ui(sample.position);
        let events = self.tracker.process_frame(sample, is_over_ui);
        for event in &events {
            debug!("Gesture: {event:?}");
            self.sink.publish(*event);
        }
        events.len()
    }

    fn apply_signals(&mut self) {
        // When all senders are gone, the tracker just keeps its last state.
        while let Ok(signal) = self.signals.try_recv() {
            self.tracker.handle_signal(signal);
        }
    }

    pub fn tracker(&self) -> &DragGestureTracker {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
