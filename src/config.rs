use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::audio::{Volume, DEFAULT_VOLUME};
use crate::paths;
use crate::sound::{Sound, SoundLibrary};
use crate::timer::session::DEFAULT_MINUTES;
use crate::timer::Minutes;

/// Application configuration, loaded from <config_dir>/config.toml.
///
/// Every field has a default, so the file itself is optional and may set
/// only the values the user cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Session length in minutes (1-60).
    pub minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Track selected at startup.
    pub sound: Sound,
    /// Playback level, 0.0-1.0.
    pub volume: f32,
    /// Where the ambient tracks live. Defaults to <data_dir>/sounds.
    pub sounds_dir: Option<PathBuf>,
    /// Per-track asset overrides.
    pub tracks: BTreeMap<Sound, PathBuf>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sound: Sound::default(),
            volume: DEFAULT_VOLUME,
            sounds_dir: None,
            tracks: BTreeMap::new(),
        }
    }
}

/// Startup values for the timer, checked against their valid ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub duration: Minutes,
    pub sound: Sound,
    pub volume: Volume,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub minutes: Option<u32>,
    pub sound: Option<Sound>,
    pub volume: Option<f32>,
}

impl AppConfig {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(minutes) = overrides.minutes {
            self.timer.minutes = minutes;
        }
        if let Some(sound) = overrides.sound {
            self.audio.sound = sound;
        }
        if let Some(volume) = overrides.volume {
            self.audio.volume = volume;
        }
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            duration: Minutes::new(self.timer.minutes).context("Invalid timer.minutes")?,
            sound: self.audio.sound,
            volume: Volume::new(self.audio.volume).context("Invalid audio.volume")?,
        })
    }

    pub fn sounds_dir(&self) -> PathBuf {
        self.audio
            .sounds_dir
            .clone()
            .unwrap_or_else(paths::sounds_dir)
    }

    pub fn sound_library(&self) -> SoundLibrary {
        SoundLibrary::new(&self.sounds_dir(), &self.audio.tracks)
    }
}

/// Load the application config from <config_dir>/config.toml.
/// If the file doesn't exist, returns defaults.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&paths::config_file())
}

/// Like [`load_config`], but an unreadable or malformed file falls back to
/// defaults. The error is handed back so the caller can report it.
pub fn load_config_or_default() -> (AppConfig, Option<anyhow::Error>) {
    load_config_or_default_from(&paths::config_file())
}

fn load_config_or_default_from(path: &Path) -> (AppConfig, Option<anyhow::Error>) {
    match load_config_from(path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
