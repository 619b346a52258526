//! Line-crossing counter driving the band sampler and the classifiers.
//!
//! Typical usage:
//! ```no_run
//! use line_crossing::mask::MaskU8;
//! use line_crossing::LineCrossingCounter;
//!
//! # fn example(frames: &[Vec<u8>], w: usize, h: usize) {
//! let mut counter = LineCrossingCounter::default();
//! counter.line_at(0.5);
//! for frame in frames {
//!     if !counter.update(&MaskU8::new(w, h, frame)) {
//!         eprintln!("{}", counter.errors().message());
//!         continue;
//!     }
//!     if counter.crossed_left_to_right() || counter.crossed_right_to_left() {
//!         println!(
//!             "in={} out={}",
//!             counter.left_to_right_count(),
//!             counter.right_to_left_count()
//!         );
//!     }
//! }
//! # }
//! ```
use super::bands::{BandTimestamps, Clock, BAND_OFFSETS};
use super::chain::{chain_score, is_crossing, Direction};
use super::error::CrossingError;
use super::geometry::ResolvedGeometry;
use super::params::{CounterParams, SamplingParams};
use crate::diagnostics::CounterReport;
use crate::errors::{ErrorMessage, ErrorSink};
use crate::gate::{Cooldown, Debounce};
use crate::mask::MotionMask;
use log::{debug, trace};

/// Counts objects crossing a vertical line, in both directions.
///
/// The counter owns its debounce gate `G` and error sink `E`. The motion mask
/// is borrowed for the duration of each [`update`](Self::update) call and
/// never copied.
pub struct LineCrossingCounter<G = Cooldown, E = ErrorMessage> {
    params: CounterParams,
    clock: Clock,
    bands: BandTimestamps,
    geometry: Option<ResolvedGeometry>,
    left_to_right: u32,
    right_to_left: u32,
    gate: G,
    errors: E,
}

impl Default for LineCrossingCounter {
    fn default() -> Self {
        Self::new(CounterParams::default())
    }
}

impl LineCrossingCounter {
    /// Counter with a zero-length cooldown and an in-memory error holder.
    pub fn new(params: CounterParams) -> Self {
        Self::with_capabilities(params, Cooldown::default(), ErrorMessage::default())
    }
}

impl<G: Debounce, E: ErrorSink> LineCrossingCounter<G, E> {
    /// Counter owning the given debounce gate and error sink.
    pub fn with_capabilities(params: CounterParams, gate: G, errors: E) -> Self {
        Self {
            params,
            clock: Clock::default(),
            bands: BandTimestamps::default(),
            geometry: None,
            left_to_right: 0,
            right_to_left: 0,
            gate,
            errors,
        }
    }

    /// Column of the line (cells if `>= 1`, ratio of the width otherwise).
    pub fn line_at(&mut self, x: f32) {
        self.params.line.x = x;
    }

    /// Limits the analysis to rows above `y`, measured from the bottom edge.
    pub fn above(&mut self, y: f32) {
        self.params.line.min_y = y;
    }

    /// Limits the analysis to rows below `y`, measured from the bottom edge.
    pub fn below(&mut self, y: f32) {
        self.params.line.max_y = y;
    }

    /// How many ticks an object may take to cross from one band to the next.
    pub fn lag(&mut self, lag: u8) {
        self.params.sampling.lag = lag;
    }

    /// Width of each band, in columns.
    pub fn sparsity(&mut self, sparsity: u8) {
        self.params.sampling.sparsity = sparsity;
    }

    /// Replaces every parameter at once, e.g. from a loaded config.
    pub fn set_params(&mut self, params: CounterParams) {
        self.params = params;
    }

    pub fn params(&self) -> &CounterParams {
        &self.params
    }

    /// Validates the geometry against `mask` and samples the bands for a new
    /// tick. On failure the error is reported to the sink and `false` is
    /// returned; the clock and the band timestamps are left untouched.
    pub fn update<M: MotionMask + ?Sized>(&mut self, mask: &M) -> bool {
        match self.try_update(mask) {
            Ok(()) => self.errors.set_error(""),
            Err(err) => {
                debug!("LineCrossingCounter::update rejected geometry: {err:?}");
                self.errors.set_error(&err.to_string())
            }
        }
    }

    /// Same as [`update`](Self::update) without going through the error sink.
    pub fn try_update<M: MotionMask + ?Sized>(&mut self, mask: &M) -> Result<(), CrossingError> {
        let geometry = ResolvedGeometry::resolve(&self.params.line, mask.width(), mask.height())?;
        self.geometry = Some(geometry);

        if self.clock.advance() {
            // Pre-wrap timestamps would compare as future ticks.
            self.bands.clear();
            debug!("LineCrossingCounter clock wrapped, band timestamps cleared");
        }
        self.sample(mask, &geometry);
        Ok(())
    }

    fn sample<M: MotionMask + ?Sized>(&mut self, mask: &M, geometry: &ResolvedGeometry) {
        let t = self.clock.now();
        let SamplingParams { lag, sparsity } = self.params.sampling;

        for offset in BAND_OFFSETS {
            if self.bands.is_fresh(offset, t, lag) {
                continue;
            }
            if let Some((col, row)) = first_hit(mask, geometry, offset, usize::from(sparsity)) {
                trace!("t={t} band {offset:+} hit at ({col}, {row})");
                self.bands.set(offset, t);
            }
        }
    }

    /// `true` when an object crossed from left to right. Counts the crossing
    /// and touches the debounce gate.
    pub fn crossed_left_to_right(&mut self) -> bool {
        self.crossed(Direction::LeftToRight)
    }

    /// `true` when an object crossed from right to left. Counts the crossing
    /// and touches the debounce gate.
    pub fn crossed_right_to_left(&mut self) -> bool {
        self.crossed(Direction::RightToLeft)
    }

    /// Runs the classifier for `direction`; see the two methods above.
    pub fn crossed(&mut self, direction: Direction) -> bool {
        if !self.gate.is_open() {
            return false;
        }
        let score = self.score(direction);
        if !is_crossing(score) {
            return false;
        }
        match direction {
            Direction::LeftToRight => self.left_to_right += 1,
            Direction::RightToLeft => self.right_to_left += 1,
        }
        self.gate.touch();
        debug!(
            "t={} crossing {} accepted (score={score})",
            self.clock.now(),
            direction.as_str()
        );
        true
    }

    /// Current chain score for `direction`, without side effects.
    pub fn score(&self, direction: Direction) -> u8 {
        chain_score(
            &self.bands,
            self.clock.now(),
            self.params.sampling.lag,
            direction,
        )
    }

    /// Left-to-right chain score, see [`score`](Self::score).
    pub fn left_to_right_score(&self) -> u8 {
        self.score(Direction::LeftToRight)
    }

    /// Right-to-left chain score, see [`score`](Self::score).
    pub fn right_to_left_score(&self) -> u8 {
        self.score(Direction::RightToLeft)
    }

    /// How many objects crossed from left to right so far.
    pub fn left_to_right_count(&self) -> u32 {
        self.left_to_right
    }

    /// How many objects crossed from right to left so far.
    pub fn right_to_left_count(&self) -> u32 {
        self.right_to_left
    }

    /// Crossings counted so far in `direction`.
    pub fn count(&self, direction: Direction) -> u32 {
        match direction {
            Direction::LeftToRight => self.left_to_right,
            Direction::RightToLeft => self.right_to_left,
        }
    }

    /// Current tick, `0` before the first successful update.
    pub fn tick(&self) -> u16 {
        self.clock.now()
    }

    pub fn timestamps(&self) -> &BandTimestamps {
        &self.bands
    }

    /// Geometry of the last tick that passed validation.
    pub fn geometry(&self) -> Option<&ResolvedGeometry> {
        self.geometry.as_ref()
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut G {
        &mut self.gate
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }

    /// Renders the seven timestamp slots, e.g. `motion = {0, 2, 3, 0, 0, 0, 0}`.
    pub fn debug(&self) -> String {
        let slots: Vec<String> = self
            .bands
            .as_slots()
            .iter()
            .map(|t| t.to_string())
            .collect();
        format!("motion = {{{}}}", slots.join(", "))
    }

    /// Serializable snapshot of the counter state.
    pub fn report(&self) -> CounterReport {
        CounterReport {
            tick: self.tick(),
            timestamps: *self.bands.as_slots(),
            left_to_right_score: self.left_to_right_score(),
            right_to_left_score: self.right_to_left_score(),
            left_to_right_count: self.left_to_right,
            right_to_left_count: self.right_to_left,
            gate_open: self.gate.is_open(),
            geometry: self.geometry,
        }
    }
}

/// First foreground cell of the band at `offset`, scanning sub-columns left to
/// right and rows in ascending order.
fn first_hit<M: MotionMask + ?Sized>(
    mask: &M,
    geometry: &ResolvedGeometry,
    offset: i8,
    sparsity: usize,
) -> Option<(usize, usize)> {
    (0..sparsity)
        .filter_map(|j| geometry.band_column(offset, sparsity, j))
        .find_map(|col| {
            (geometry.below..geometry.above)
                .find(|&row| mask.is_foreground(col, row))
                .map(|row| (col, row))
        })
}
