//! Parameter types configuring the line and the band sampler.
//!
//! Positions follow the convention of the device firmware: a value `>= 1` is
//! already in mask cells, a value `< 1` is a ratio of the mask width (for the
//! line) or height (for the vertical bounds). Nothing is validated here; the
//! counter resolves and checks the geometry at every tick.

use serde::{Deserialize, Serialize};

/// Placement of the virtual vertical line and of the analysed rows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Column of the line.
    pub x: f32,
    /// Distance from the bottom edge to the lowest analysed row.
    pub min_y: f32,
    /// Distance from the bottom edge to the highest analysed row.
    pub max_y: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            min_y: 0.0,
            max_y: 0.999,
        }
    }
}

/// Temporal and spatial sensitivity of the band sampler.
///
/// - `lag`: how many ticks an object may take to move from one band to the
///   next. Increase it for slower transitions.
/// - `sparsity`: width in columns of each band. Smaller bands detect smaller
///   objects. Both are expected to be `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    pub lag: u8,
    pub sparsity: u8,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            lag: 3,
            sparsity: 4,
        }
    }
}

/// Counter-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterParams {
    pub line: LineParams,
    pub sampling: SamplingParams,
}
