//! Seams to the host: where gesture events go, and how to find out if the pointer is over UI.
use log::error;
use tokio::sync::mpsc::UnboundedSender;

use crate::{GestureEvent, ScreenPoint};

/// Receives the gesture events in the order they were detected.
pub trait GestureSink {
    fn publish(&mut self, event: GestureEvent);
}

impl GestureSink for Vec<GestureEvent> {
    fn publish(&mut self, event: GestureEvent) {
        self.push(event);
    }
}

/// Publishes to a subscriber on the other end of an unbounded channel.
///
/// A subscriber going away is reported once, later events are dropped silently.
#[derive(Debug)]
pub struct ChannelSink {
    sender: UnboundedSender<GestureEvent>,
    subscriber_gone: bool,
}

impl ChannelSink {
    pub fn new(sender: UnboundedSender<GestureEvent>) -> Self {
        Self {
            sender,
            subscriber_gone: false,
        }
    }

    pub fn is_subscriber_gone(&self) -> bool {
        self.subscriber_gone
    }
}

impl From<UnboundedSender<GestureEvent>> for ChannelSink {
    fn from(sender: UnboundedSender<GestureEvent>) -> Self {
        Self::new(sender)
    }
}

impl GestureSink for ChannelSink {
    fn publish(&mut self, event: GestureEvent) {
        if self.subscriber_gone {
            return;
        }
        if self.sender.send(event).is_err() {
            error!("Gesture event subscriber is gone, dropping {event:?} and all following events");
            self.subscriber_gone = true;
        }
    }
}

impl<S: GestureSink + ?Sized> GestureSink for &mut S {
    fn publish(&mut self, event: GestureEvent) {
        (**self).publish(event)
    }
}

/// Answers whether the pointer is over a UI surface, in which case gestures are suppressed.
///
/// Queried once per frame and expected to be free of side effects.
pub trait UiOcclusion {
    fn is_pointer_over_ui(&self, position: ScreenPoint) -> bool;
}

impl<F> UiOcclusion for F
where
    F: Fn(ScreenPoint) -> bool,
{
    fn is_pointer_over_ui(&self, position: ScreenPoint) -> bool {
        self(position)
    }
}

/// There is no UI at all.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoUi;

impl UiOcclusion for NoUi {
    fn is_pointer_over_ui(&self, _position: ScreenPoint) -> bool {
        false
    }
}
