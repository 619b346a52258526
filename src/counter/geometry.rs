//! Resolution of the raw line parameters into mask cells.
use super::error::CrossingError;
use super::params::LineParams;
use serde::Serialize;

/// Smallest accepted line column.
pub const MIN_LINE_X: usize = 8;

/// Line geometry in mask cells for one tick.
///
/// Rows are scanned over `below..above`. Both bounds are clamped into
/// `[0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedGeometry {
    pub x: usize,
    pub below: usize,
    pub above: usize,
    pub width: usize,
    pub height: usize,
}

impl ResolvedGeometry {
    /// Resolves and validates `line` against a `width` x `height` mask.
    pub fn resolve(
        line: &LineParams,
        width: usize,
        height: usize,
    ) -> Result<Self, CrossingError> {
        // NaN and negative values truncate to 0 and fail below.
        let x = to_cells(line.x, width).max(0.0) as usize;
        let above = rows_from_bottom(line.min_y, height);
        let below = rows_from_bottom(line.max_y, height);

        if x < MIN_LINE_X {
            return Err(CrossingError::InvalidLineOffset { x });
        }
        if below >= above {
            return Err(CrossingError::InvalidVerticalBounds { below, above });
        }
        Ok(Self {
            x,
            below,
            above,
            width,
            height,
        })
    }

    /// Absolute column of sub-column `j` of the band at `offset`, or `None`
    /// when it falls outside the mask.
    #[inline]
    pub fn band_column(&self, offset: i8, sparsity: usize, j: usize) -> Option<usize> {
        let x = isize::try_from(self.x).ok()?;
        let col = isize::from(offset)
            .checked_mul(isize::try_from(sparsity).ok()?)?
            .checked_add(isize::try_from(j).ok()?)?
            .checked_add(x)?;
        let col = usize::try_from(col).ok()?;
        (col < self.width).then_some(col)
    }
}

#[inline]
fn to_cells(value: f32, extent: usize) -> f32 {
    if value >= 1.0 {
        value
    } else {
        value * extent as f32
    }
}

#[inline]
fn rows_from_bottom(value: f32, height: usize) -> usize {
    let rows = height as f32 - to_cells(value, height);
    rows.clamp(0.0, height as f32) as usize
}
