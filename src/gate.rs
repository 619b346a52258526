//! Debounce gates consulted before a crossing is accepted.
//!
//! The counter only asks two things of a gate: whether it is open, and to be
//! touched when a crossing was just counted. The cooldown policy lives here,
//! outside the classifiers.
use std::time::{Duration, Instant};

/// Cooldown capability injected into the counter.
pub trait Debounce {
    /// `false` while cooling down.
    fn is_open(&self) -> bool;

    /// Marks that a crossing was just counted.
    fn touch(&mut self);
}

/// Wall-clock cooldown: closed for `interval` after each touch, open before
/// the first one.
#[derive(Clone, Debug)]
pub struct Cooldown {
    interval: Duration,
    touched_at: Option<Instant>,
}

impl Cooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            touched_at: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the gate reopens.
    pub fn remaining(&self) -> Duration {
        match self.touched_at {
            Some(at) => self.interval.saturating_sub(at.elapsed()),
            None => Duration::ZERO,
        }
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Debounce for Cooldown {
    fn is_open(&self) -> bool {
        match self.touched_at {
            Some(at) => at.elapsed() >= self.interval,
            None => true,
        }
    }

    fn touch(&mut self) {
        self.touched_at = Some(Instant::now());
    }
}

/// Frame-counted cooldown: closed for `frames` calls to [`advance`](Self::advance)
/// after each touch. The caller advances it once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCooldown {
    frames: u32,
    remaining: u32,
}

impl FrameCooldown {
    pub fn new(frames: u32) -> Self {
        Self {
            frames,
            remaining: 0,
        }
    }

    pub fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Frames left before the gate reopens.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Debounce for FrameCooldown {
    fn is_open(&self) -> bool {
        self.remaining == 0
    }

    fn touch(&mut self) {
        self.remaining = self.frames;
    }
}

/// Gate that never cools down; every accepted chain is counted.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysOpen;

impl Debounce for AlwaysOpen {
    fn is_open(&self) -> bool {
        true
    }

    fn touch(&mut self) {}
}

impl<G: Debounce + ?Sized> Debounce for &mut G {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn touch(&mut self) {
        (**self).touch()
    }
}
