use line_crossing::config::replay::{load_config, ReplayConfig};
use line_crossing::diagnostics::{CrossingEvent, InputDescriptor, ReplaySummary, TimingBreakdown};
use line_crossing::mask::io::{load_mask_image, write_json_file, GrayMaskU8};
use line_crossing::mask::MotionMask;
use line_crossing::{Cooldown, Direction, ErrorMessage, LineCrossingCounter};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let frames = config.frame_paths()?;

    let mut timings = TimingBreakdown::default();
    let start = Instant::now();
    let masks = load_masks(&frames, config.mask_threshold)?;
    timings.push("load_masks", start.elapsed().as_secs_f64() * 1000.0);

    let start = Instant::now();
    let mut summary = replay(&config, &frames, &masks, timings)?;
    summary
        .timings
        .push("count", start.elapsed().as_secs_f64() * 1000.0);

    for event in &summary.events {
        println!(
            "frame {:>5} ({}): {} score={} count={}",
            event.frame_index,
            event.frame.display(),
            event.direction.as_str(),
            event.score,
            event.count
        );
    }
    println!(
        "Processed {} frames ({} rejected): left_to_right={} right_to_left={}",
        summary.frames_processed,
        summary.failed_frames,
        summary.final_state.left_to_right_count,
        summary.final_state.right_to_left_count
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &summary)?;
        println!("Saved replay summary to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn load_masks(frames: &[PathBuf], threshold: u8) -> Result<Vec<GrayMaskU8>, String> {
    frames
        .par_iter()
        .map(|path| load_mask_image(path, threshold))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn load_masks(frames: &[PathBuf], threshold: u8) -> Result<Vec<GrayMaskU8>, String> {
    frames
        .iter()
        .map(|path| load_mask_image(path, threshold))
        .collect()
}

fn replay(
    config: &ReplayConfig,
    frames: &[PathBuf],
    masks: &[GrayMaskU8],
    timings: TimingBreakdown,
) -> Result<ReplaySummary, String> {
    let first = masks.first().ok_or("No masks to replay")?;
    let (width, height) = (first.width(), first.height());

    let mut counter = LineCrossingCounter::with_capabilities(
        config.params,
        Cooldown::from_millis(config.cooldown_ms),
        ErrorMessage::new(),
    );
    let mut events = Vec::new();
    let mut failed_frames = 0usize;

    for (frame_index, (path, mask)) in frames.iter().zip(masks).enumerate() {
        if mask.width() != width || mask.height() != height {
            return Err(format!(
                "Mask {} is {}x{}, expected {}x{}",
                path.display(),
                mask.width(),
                mask.height(),
                width,
                height
            ));
        }
        if !counter.update(mask) {
            log::warn!(
                "frame {frame_index} ({}): {}",
                path.display(),
                counter.errors().message()
            );
            failed_frames += 1;
            continue;
        }
        for direction in [Direction::LeftToRight, Direction::RightToLeft] {
            let score = counter.score(direction);
            if counter.crossed(direction) {
                events.push(CrossingEvent {
                    frame_index,
                    frame: path.clone(),
                    tick: counter.tick(),
                    direction,
                    score,
                    count: counter.count(direction),
                });
            }
        }
    }

    Ok(ReplaySummary {
        input: InputDescriptor {
            frame_count: frames.len(),
            width,
            height,
        },
        params: config.params,
        frames_processed: frames.len(),
        failed_frames,
        events,
        final_state: counter.report(),
        timings,
    })
}

fn usage() -> String {
    "Usage: mask_replay <config.json>".to_string()
}
