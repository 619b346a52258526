use crate::counter::ResolvedGeometry;
use serde::Serialize;

/// Snapshot returned by [`LineCrossingCounter::report`](crate::LineCrossingCounter::report).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterReport {
    pub tick: u16,
    /// Band timestamps indexed by `offset + 3`.
    pub timestamps: [u16; 7],
    pub left_to_right_score: u8,
    pub right_to_left_score: u8,
    pub left_to_right_count: u32,
    pub right_to_left_count: u32,
    pub gate_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<ResolvedGeometry>,
}
