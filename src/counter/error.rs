use thiserror::Error;

/// Geometry rejected by the per-tick validation. The tick is skipped and the
/// band timestamps keep their previous values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CrossingError {
    /// Resolved line column leaves no room for the bands on its left.
    #[error("x-coordinate must be >= 8")]
    InvalidLineOffset { x: usize },
    /// Empty or inverted vertical window.
    #[error("above/below limits mismatch")]
    InvalidVerticalBounds { below: usize, above: usize },
}
