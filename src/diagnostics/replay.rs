use super::{CounterReport, TimingBreakdown};
use crate::counter::{CounterParams, Direction};
use serde::Serialize;
use std::path::PathBuf;

/// Result written by the `mask_replay` tool.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub input: InputDescriptor,
    pub params: CounterParams,
    pub frames_processed: usize,
    /// Frames whose tick was rejected by the geometry validation.
    pub failed_frames: usize,
    pub events: Vec<CrossingEvent>,
    pub final_state: CounterReport,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub frame_count: usize,
    pub width: usize,
    pub height: usize,
}

/// One accepted crossing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossingEvent {
    pub frame_index: usize,
    pub frame: PathBuf,
    pub tick: u16,
    pub direction: Direction,
    pub score: u8,
    /// Counter value for `direction` after the crossing.
    pub count: u32,
}
