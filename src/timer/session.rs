use std::fmt;

use anyhow::bail;

/// Shortest session the duration control allows.
pub const MIN_MINUTES: u32 = 1;
/// Longest session the duration control allows.
pub const MAX_MINUTES: u32 = 60;
/// Duration used when nothing else is configured.
pub const DEFAULT_MINUTES: u32 = 20;

/// A session length in whole minutes, always within 1..=60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(u32);

impl Minutes {
    pub fn new(minutes: u32) -> anyhow::Result<Self> {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            bail!("Session length must be between {MIN_MINUTES} and {MAX_MINUTES} minutes, got {minutes}");
        }
        Ok(Self(minutes))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_secs(self) -> u32 {
        self.0 * 60
    }

    /// Step by `delta` minutes, pinned to the valid range.
    pub fn offset(self, delta: i32) -> Self {
        let stepped = (self.0 as i64 + delta as i64).clamp(MIN_MINUTES as i64, MAX_MINUTES as i64);
        Self(stepped as u32)
    }
}

impl Default for Minutes {
    fn default() -> Self {
        Self(DEFAULT_MINUTES)
    }
}

impl TryFrom<u32> for Minutes {
    type Error = anyhow::Error;

    fn try_from(minutes: u32) -> anyhow::Result<Self> {
        Self::new(minutes)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// Countdown state for one meditation session.
///
/// Invariant: `remaining <= total`, and `remaining` never grows while the
/// session is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    total: u32,
    remaining: u32,
    running: bool,
}

impl Session {
    pub fn new(duration: Minutes) -> Self {
        let total = duration.as_secs();
        Self {
            total,
            remaining: total,
            running: false,
        }
    }

    pub fn total_secs(&self) -> u32 {
        self.total
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Share of the session still to go, in [0, 1]. A zero-length session
    /// counts as fully elapsed.
    pub fn fraction_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.remaining as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Count down one second. Returns true when this call reached zero.
    pub(crate) fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub(crate) fn rewind(&mut self) {
        self.remaining = self.total;
    }

    /// Change the total. An idle session restarts from the new total; a
    /// running one keeps its remaining time (capped at the new total).
    pub(crate) fn set_total(&mut self, duration: Minutes) {
        self.total = duration.as_secs();
        if self.running {
            self.remaining = self.remaining.min(self.total);
        } else {
            self.remaining = self.total;
        }
    }
}
