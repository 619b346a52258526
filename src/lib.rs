#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod counter;
pub mod diagnostics;
pub mod errors;
pub mod gate;
pub mod mask;

// Tool support (replay configuration).
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::counter::{CounterParams, CrossingError, Direction, LineCrossingCounter};
pub use crate::diagnostics::CounterReport;
pub use crate::errors::{ErrorMessage, ErrorSink};
pub use crate::gate::{AlwaysOpen, Cooldown, Debounce, FrameCooldown};
pub use crate::mask::{MaskU8, MotionMask};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_crossing::prelude::*;
///
/// # fn main() {
/// let (w, h) = (80usize, 60usize);
/// let mask = vec![0u8; w * h];
///
/// let mut counter = LineCrossingCounter::new(CounterParams::default());
/// counter.line_at(0.5);
/// counter.update(&MaskU8::new(w, h, &mask));
/// println!("{}", counter.debug());
/// # }
/// ```
pub mod prelude {
    pub use crate::mask::{MaskU8, MotionMask};
    pub use crate::{CounterParams, Debounce, LineCrossingCounter};
}
