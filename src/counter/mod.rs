//! Directional line-crossing counter over per-frame motion masks.
//!
//! Overview
//! - Six bands flank a virtual vertical line, three on each side. Each band
//!   is `sparsity` columns wide and restricted to the configured rows.
//! - Every tick, bands whose last detection is older than `lag` ticks are
//!   rescanned; the first foreground cell found stamps the band with the
//!   current tick.
//! - A comparator scores whether one band fired after another within `lag`
//!   ticks (10 strict, 1 same tick, 0 otherwise or stale).
//! - Each direction sums four links into a score in `0..=40`; a crossing is
//!   accepted when the score is above 20 and not a multiple of 10, and the
//!   debounce gate is open.
//!
//! Modules
//! - [`params`] – line placement and sampler tunables.
//! - [`geometry`] – per-tick resolution of the parameters into mask cells.
//! - [`bands`] – tick clock and band timestamps.
//! - [`chain`] – comparator, chain templates and acceptance threshold.
//! - `pipeline` – the [`LineCrossingCounter`] itself.

pub mod bands;
pub mod chain;
mod error;
pub mod geometry;
pub mod params;
mod pipeline;


pub use bands::{slot, BandTimestamps, BAND_OFFSETS, CLOCK_WRAP};
pub use chain::{compare, is_crossing, Direction};
pub use error::CrossingError;
pub use geometry::{ResolvedGeometry, MIN_LINE_X};
pub use params::{CounterParams, LineParams, SamplingParams};
pub use pipeline::LineCrossingCounter;
