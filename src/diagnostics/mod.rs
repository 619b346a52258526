//! Serializable diagnostics exposed by the counter and the replay tool.
//!
//! `CounterReport` is a snapshot of one counter at a given tick. The replay
//! tool aggregates its run into a `ReplaySummary` with per-event records and
//! stage timings.

pub mod counter;
pub mod replay;
pub mod timing;

pub use counter::CounterReport;
pub use replay::{CrossingEvent, InputDescriptor, ReplaySummary};
pub use timing::{StageTiming, TimingBreakdown};
