//! Replays a scripted pointer session through the gesture input and logs what gets published.
//!
//! `cargo run --example replay -- [config.toml]`, use `RUST_LOG=debug` to see the signals, too.
use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;
use tokio::sync::mpsc;
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceId, ElementState, MouseButton, WindowEvent},
};

use gesture_input::{
    ChannelSink, ControlSignal, ExternalEvent, GestureConfig, GestureInput, PointerSampler,
    ScreenPoint,
};

const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Everything left of this is covered by a side panel.
const PANEL_WIDTH: f64 = 40.0;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/examples/gesture.toml").into());
    let config = GestureConfig::load(&path)?;

    let (events, mut subscriber) = mpsc::unbounded_channel();
    let over_panel = |position: ScreenPoint| position.x < PANEL_WIDTH;
    let (mut input, signals) = GestureInput::new(config, ChannelSink::from(events), over_panel);
    signals.send(ControlSignal::EnableInput)?;

    let mut sampler = PointerSampler::default();
    let start = Instant::now();

    for (frame, window_events) in script().into_iter().enumerate() {
        for event in window_events {
            sampler.update(&event.into());
        }
        let tick = ExternalEvent::FrameTick(start + FRAME * frame as u32);
        let Some(sample) = sampler.update(&tick) else {
            continue;
        };
        input.frame(&sample);

        while let Ok(event) = subscriber.try_recv() {
            info!("frame {frame}: {event:?}");
        }
    }

    Ok(())
}

/// Window events, grouped by frame.
fn script() -> Vec<Vec<WindowEvent>> {
    let device_id = DeviceId::dummy();
    let moved = |x: f64| WindowEvent::CursorMoved {
        device_id,
        position: PhysicalPosition::new(x, 100.0),
    };
    let button = |state| WindowEvent::MouseInput {
        device_id,
        state,
        button: MouseButton::Left,
    };

    vec![
        vec![moved(100.0)],
        vec![button(ElementState::Pressed)],
        vec![moved(70.0)],
        vec![moved(72.0)],
        vec![moved(77.0)],
        vec![moved(82.0)],
        vec![button(ElementState::Released)],
        // Over the panel, nothing is published.
        vec![moved(20.0), button(ElementState::Pressed)],
        vec![button(ElementState::Released)],
    ]
}
