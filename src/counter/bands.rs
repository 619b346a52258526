//! Tick clock and per-band last-detection timestamps.
//!
//! Bands are addressed by their signed offset from the line, `-3..=3`, with
//! `0` (the line itself) never sampled. `slot` is the single mapping from an
//! offset to an index in the seven-slot array; the sampler and the comparator
//! both go through it.
use serde::Serialize;

/// Offsets of the sampled bands, left to right.
pub const BAND_OFFSETS: [i8; 6] = [-3, -2, -1, 1, 2, 3];

/// Largest clock value; the next tick wraps to 1.
pub const CLOCK_WRAP: u16 = 65000;

/// Array index of the band at `offset`.
#[inline]
pub const fn slot(offset: i8) -> usize {
    debug_assert!(offset >= -3 && offset <= 3);
    (offset + 3) as usize
}

/// Monotonic tick counter. `0` means no tick has run yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    t: u16,
}

impl Clock {
    pub fn now(&self) -> u16 {
        self.t
    }

    /// Advances by one tick. Returns `true` when the clock wrapped to 1.
    pub fn advance(&mut self) -> bool {
        if self.t >= CLOCK_WRAP {
            self.t = 1;
            true
        } else {
            self.t += 1;
            false
        }
    }
}

/// Last tick at which foreground was seen in each band; `0` for never.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BandTimestamps([u16; 7]);

impl BandTimestamps {
    #[inline]
    pub fn get(&self, offset: i8) -> u16 {
        self.0[slot(offset)]
    }

    #[inline]
    pub fn set(&mut self, offset: i8, t: u16) {
        debug_assert_ne!(offset, 0, "the line itself is not a band");
        self.0[slot(offset)] = t;
    }

    /// Forgets every detection.
    pub fn clear(&mut self) {
        self.0 = [0; 7];
    }

    /// `true` while the band's detection is recent enough (within `lag`
    /// ticks of `t`) that rescanning it would add nothing.
    #[inline]
    pub fn is_fresh(&self, offset: i8, t: u16, lag: u8) -> bool {
        let ts = self.get(offset);
        ts != 0 && u32::from(ts) + u32::from(lag) >= u32::from(t)
    }

    /// Raw slots, index `slot(offset)`.
    pub fn as_slots(&self) -> &[u16; 7] {
        &self.0
    }
}

impl From<[u16; 7]> for BandTimestamps {
    fn from(slots: [u16; 7]) -> Self {
        Self(slots)
    }
}
