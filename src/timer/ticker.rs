use std::time::{Duration, Instant};

/// Countdown period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable repeating timer polled from the UI loop.
///
/// Nothing runs in the background: the loop calls [`Ticker::poll`] with the
/// current time and gets back how many periods have fired since the last
/// poll. A cancelled ticker never fires.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the ticker so the first period fires at `now + period`.
    /// Does nothing if already armed.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole periods elapsed since the previous poll. Missed
    /// periods are caught up rather than dropped.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        fired
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
