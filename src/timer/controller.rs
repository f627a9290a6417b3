use std::time::Instant;

use crate::audio::{AmbientPlayer, Volume};
use crate::sound::{Sound, SoundLibrary};
use crate::util::format_clock;

use super::color::{ring_color, Rgb};
use super::session::{Minutes, Session};
use super::ticker::Ticker;

/// What the progress ring should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingState {
    /// White outline only.
    Idle,
    /// White outline plus an arc from 12 o'clock, clockwise over
    /// `sweep_degrees`.
    Counting { sweep_degrees: f64, color: Rgb },
    /// Green outline with a centred checkmark.
    Complete,
}

/// Drives one meditation session: the countdown, the progress ring and the
/// ambient track that plays while the clock runs.
///
/// None of the operations fail. Audio problems are logged and surfaced
/// through [`TimerController::status`] while the countdown carries on.
pub struct TimerController<P> {
    session: Session,
    duration: Minutes,
    ticker: Ticker,
    ring: RingState,
    library: SoundLibrary,
    sound: Sound,
    volume: Volume,
    player: P,
    status: Option<String>,
}

impl<P: AmbientPlayer> TimerController<P> {
    pub fn new(
        duration: Minutes,
        sound: Sound,
        volume: Volume,
        library: SoundLibrary,
        mut player: P,
    ) -> Self {
        player.set_volume(volume);
        Self {
            session: Session::new(duration),
            duration,
            ticker: Ticker::default(),
            ring: RingState::Idle,
            library,
            sound,
            volume,
            player,
            status: None,
        }
    }

    /// Begin counting down and start the selected track. A finished session
    /// starts over from the full duration. No-op while running.
    pub fn start(&mut self, now: Instant) {
        if self.session.is_running() {
            return;
        }
        if self.session.is_complete() {
            self.session.rewind();
            self.ring = RingState::Idle;
        }

        self.session.set_running(true);
        self.ticker.start(now);
        self.status = None;
        tracing::info!(
            remaining = self.session.remaining_secs(),
            sound = %self.sound,
            "session started"
        );

        let path = self.library.path(self.sound);
        if let Err(e) = self.player.play_looping(path) {
            tracing::warn!(sound = %self.sound, "ambient track unavailable: {e:#}");
            self.status = Some(format!("No {} sound: {e:#}", self.sound));
        }
    }

    /// Halt the countdown and the track. Idempotent.
    pub fn stop(&mut self) {
        if self.session.is_running() {
            tracing::info!(remaining = self.session.remaining_secs(), "session stopped");
        }
        self.session.set_running(false);
        self.ticker.cancel();
        self.player.stop();
    }

    /// Stop and return to the full duration with an empty ring.
    pub fn reset(&mut self) {
        self.stop();
        self.session.rewind();
        self.ring = RingState::Idle;
        self.status = None;
        tracing::debug!(total = self.session.total_secs(), "session reset");
    }

    /// One second of countdown. Ignored unless running.
    pub fn tick(&mut self) {
        if !self.session.is_running() {
            return;
        }
        let finished = self.session.tick();
        self.ring = RingState::Counting {
            sweep_degrees: 360.0 * self.session.fraction_remaining(),
            color: ring_color(self.session.remaining_secs(), self.session.total_secs()),
        };

        if finished {
            self.stop();
            self.ring = RingState::Complete;
            let at = chrono::Local::now().format("%H:%M");
            self.status = Some(format!("Session complete at {at}"));
            tracing::info!(total = self.session.total_secs(), "session complete");
        }
    }

    /// Run every tick that has come due by `now`. Returns how many ran.
    pub fn advance(&mut self, now: Instant) -> u32 {
        if !self.ticker.is_armed() {
            return 0;
        }
        let due = self.ticker.poll(now);
        let mut ran = 0;
        for _ in 0..due {
            if !self.session.is_running() {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Change the session length. While idle the clock jumps to the new
    /// duration straight away; while running only the total changes.
    pub fn set_duration(&mut self, duration: Minutes) {
        self.duration = duration;
        self.session.set_total(duration);
        if !self.session.is_running() {
            self.ring = RingState::Idle;
        }
        tracing::debug!(minutes = duration.get(), "duration changed");
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        self.player.set_volume(volume);
        tracing::debug!(volume = volume.get(), "volume changed");
    }

    /// Pick the ambient track for the next start.
    pub fn select_sound(&mut self, sound: Sound) {
        self.sound = sound;
        tracing::debug!(%sound, "sound selected");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.session.remaining_secs())
    }

    pub fn ring(&self) -> RingState {
        self.ring
    }

    pub fn duration(&self) -> Minutes {
        self.duration
    }

    pub fn sound(&self) -> Sound {
        self.sound
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn library(&self) -> &SoundLibrary {
        &self.library
    }

    #[cfg(test)]
    pub fn player(&self) -> &P {
        &self.player
    }
}
