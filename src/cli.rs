use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;
use crate::sound::Sound;

#[derive(Parser)]
#[command(name = "meditimer")]
#[command(about = "Meditation timer with a countdown ring and ambient sounds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Startup values; each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Session length in minutes (1-60)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub minutes: Option<u32>,

    /// Ambient track to play
    #[arg(short, long, global = true, value_enum)]
    pub sound: Option<Sound>,

    /// Playback volume (0.0-1.0)
    #[arg(long, global = true)]
    pub volume: Option<f32>,
}

impl From<&SessionArgs> for Overrides {
    fn from(args: &SessionArgs) -> Self {
        Overrides {
            minutes: args.minutes,
            sound: args.sound,
            volume: args.volume,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the timer (the default)
    Run,

    /// List the ambient tracks and where their audio files are expected
    Sounds,

    /// Show where config, sound and log files are stored
    Paths,
}
