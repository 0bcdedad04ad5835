use std::time::Instant;

use winit::event::WindowEvent;

/// The raw input the host loop forwards to the [`PointerSampler`](crate::PointerSampler).
#[derive(Debug)]
pub enum ExternalEvent {
    Window(WindowEvent),
    /// A frame begins. The pointer state aggregated so far becomes one sample.
    FrameTick(Instant),
}

impl From<WindowEvent> for ExternalEvent {
    fn from(event: WindowEvent) -> Self {
        Self::Window(event)
    }
}
