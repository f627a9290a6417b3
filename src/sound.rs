use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The fixed set of ambient tracks the user can pick from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    #[default]
    Ocean,
    Forest,
    Rainforest,
    Wind,
    Waterfall,
}

impl Sound {
    pub const ALL: [Sound; 5] = [
        Sound::Ocean,
        Sound::Forest,
        Sound::Rainforest,
        Sound::Wind,
        Sound::Waterfall,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sound::Ocean => "ocean",
            Sound::Forest => "forest",
            Sound::Rainforest => "rainforest",
            Sound::Wind => "wind",
            Sound::Waterfall => "waterfall",
        }
    }

    /// File name looked up in the sounds directory when no override is set.
    pub fn default_file_name(self) -> String {
        format!("{}_sound.mp3", self.name())
    }

    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Track table: which asset file plays for each [`Sound`].
///
/// Built once at startup from the config and handed to the timer controller.
#[derive(Debug, Clone)]
pub struct SoundLibrary {
    tracks: BTreeMap<Sound, PathBuf>,
}

impl SoundLibrary {
    /// Every track defaults to `<dir>/<name>_sound.mp3`; entries in
    /// `overrides` replace the default path for that track. Relative
    /// override paths are resolved against `dir`.
    pub fn new(dir: &Path, overrides: &BTreeMap<Sound, PathBuf>) -> Self {
        let tracks = Sound::ALL
            .iter()
            .map(|&sound| {
                let path = match overrides.get(&sound) {
                    Some(p) if p.is_absolute() => p.clone(),
                    Some(p) => dir.join(p),
                    None => dir.join(sound.default_file_name()),
                };
                (sound, path)
            })
            .collect();
        Self { tracks }
    }

    pub fn path(&self, sound: Sound) -> &Path {
        // Every variant is inserted by `new`.
        &self.tracks[&sound]
    }

    pub fn entries(&self) -> impl Iterator<Item = (Sound, &Path)> {
        self.tracks.iter().map(|(&s, p)| (s, p.as_path()))
    }

    /// Tracks whose asset file is not present on disk.
    pub fn missing(&self) -> Vec<Sound> {
        self.entries()
            .filter(|(_, path)| !path.exists())
            .map(|(sound, _)| sound)
            .collect()
    }
}
