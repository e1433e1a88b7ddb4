use anyhow::Result;
use serde::Serialize;

use glidepage_core::{AppConfig, ScrollController, ScrollTarget, ScrollToOptions};

#[derive(Debug, Serialize)]
struct FrameRecord {
    frame: u32,
    time: f64,
    offset: f64,
    velocity: f64,
    progress: f64,
}

/// Step the controller headlessly on a fixed virtual clock and print the
/// per-frame trace. Useful for eyeballing easing curves and settle times
/// without a terminal UI.
pub fn run(config: &AppConfig, target: f64, limit: f64, frames: u32, json: bool) -> Result<()> {
    let trace = build_trace(config, target, limit, frames)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        println!(
            "{:>5} {:>8} {:>10} {:>10} {:>9}",
            "frame", "time", "offset", "velocity", "progress"
        );
        for record in &trace {
            println!(
                "{:>5} {:>8.3} {:>10.2} {:>10.2} {:>9.3}",
                record.frame, record.time, record.offset, record.velocity, record.progress
            );
        }
    }
    Ok(())
}

fn build_trace(
    config: &AppConfig,
    target: f64,
    limit: f64,
    frames: u32,
) -> Result<Vec<FrameRecord>> {
    let fps = config.scroll.animation_fps.max(1) as f64;
    let mut controller = ScrollController::new(config.scroll.clone())?;
    controller.set_limit(limit);
    controller.scroll_to(ScrollTarget::Offset(target), ScrollToOptions::default());

    let mut trace = Vec::with_capacity(frames as usize);
    for frame in 1..=frames {
        let time = frame as f64 / fps;
        let state = controller.update(time);
        trace.push(FrameRecord {
            frame,
            time,
            offset: state.offset,
            velocity: state.velocity,
            progress: state.progress,
        });
    }
    Ok(trace)
}
