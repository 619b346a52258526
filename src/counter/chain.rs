//! Temporal comparator and the directional chain templates built on it.
use super::bands::BandTimestamps;
use serde::Serialize;

/// Weight of a link where band `a` fired strictly after band `b`.
pub const STRONG_LINK: u8 = 10;
/// Weight of a link where both bands fired on the same tick.
pub const WEAK_LINK: u8 = 1;

/// `(a, b)`: band `a` is expected to fire after band `b`.
pub type Link = (i8, i8);

const LEFT_TO_RIGHT: [Link; 4] = [(-2, -3), (-1, -2), (1, -1), (2, 1)];
const RIGHT_TO_LEFT: [Link; 4] = [(-2, -1), (-1, 1), (1, 2), (2, 3)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Links whose weights are summed into the direction's score.
    pub fn chain(self) -> &'static [Link; 4] {
        match self {
            Self::LeftToRight => &LEFT_TO_RIGHT,
            Self::RightToLeft => &RIGHT_TO_LEFT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
        }
    }
}

/// Scores whether band `a` fired after band `b` within `lag` ticks, as seen
/// at tick `t`.
///
/// Returns [`STRONG_LINK`] for a strict ordering, [`WEAK_LINK`] for equal
/// timestamps, and `0` when either band never fired, when `a` is older than
/// `2 * lag` ticks, or when the ordering does not hold.
pub fn compare(bands: &BandTimestamps, t: u16, lag: u8, a: i8, b: i8) -> u8 {
    let ta = u32::from(bands.get(a));
    let tb = u32::from(bands.get(b));
    let lag = u32::from(lag);

    if ta == 0 || tb == 0 || ta + 2 * lag < u32::from(t) {
        return 0;
    }
    if ta > tb && ta - tb <= lag {
        return STRONG_LINK;
    }
    if ta == tb {
        return WEAK_LINK;
    }
    0
}

/// Sum of the link weights of `direction`'s chain, in `0..=40`.
pub fn chain_score(bands: &BandTimestamps, t: u16, lag: u8, direction: Direction) -> u8 {
    direction
        .chain()
        .iter()
        .map(|&(a, b)| compare(bands, t, lag, a, b))
        .sum()
}

/// Acceptance threshold on a chain score.
///
/// More than two strong links are required, and sums made only of strong
/// links (multiples of 10) are rejected.
#[inline]
pub fn is_crossing(score: u8) -> bool {
    score > 20 && score % 10 != 0
}
