pub mod playback;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Default playback level.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Playback level in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f32);

impl Volume {
    pub fn new(level: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&level) {
            bail!("Volume must be between 0.0 and 1.0, got {level}");
        }
        Ok(Self(level))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Step by `delta`, pinned to [0, 1]. Rounded to two decimals so
    /// repeated key presses land on clean values.
    pub fn offset(self, delta: f32) -> Self {
        let stepped = ((self.0 + delta) * 100.0).round() / 100.0;
        Self(stepped.clamp(0.0, 1.0))
    }

    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Looping ambient-track playback as seen by the timer.
pub trait AmbientPlayer {
    /// Load the asset at `path` and loop it until [`AmbientPlayer::stop`],
    /// replacing whatever is playing.
    fn play_looping(&mut self, path: &Path) -> Result<()>;

    /// Stop playback. Safe to call when nothing is playing.
    fn stop(&mut self);

    /// Apply `volume` now and to every later `play_looping`.
    fn set_volume(&mut self, volume: Volume);
}

impl<P: AmbientPlayer + ?Sized> AmbientPlayer for Box<P> {
    fn play_looping(&mut self, path: &Path) -> Result<()> {
        (**self).play_looping(path)
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn set_volume(&mut self, volume: Volume) {
        (**self).set_volume(volume)
    }
}

/// Player used when no output device is available: keeps track of what
/// would be playing so the rest of the app behaves the same.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    current: Option<PathBuf>,
    volume: Volume,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AmbientPlayer for SilentPlayer {
    fn play_looping(&mut self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), volume = self.volume.get(), "silent playback");
        self.current = Some(path.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.current = None;
    }

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }
}
