use anyhow::{Context, Result};
use console::style;

use crate::audio::playback::RodioPlayer;
use crate::audio::{AmbientPlayer, SilentPlayer};
use crate::config::AppConfig;
use crate::paths;
use crate::timer::TimerController;
use crate::tui;
use crate::util::format_clock;

/// Open the timer screen with the configured startup values.
///
/// Without a usable output device the timer still runs, silently.
pub fn run_timer(config: &AppConfig) -> Result<()> {
    let settings = config.settings()?;
    let library = config.sound_library();

    for sound in library.missing() {
        tracing::warn!(%sound, path = %library.path(sound).display(), "ambient track not found");
    }

    let player: Box<dyn AmbientPlayer> = match RodioPlayer::open(settings.volume) {
        Ok(player) => Box::new(player),
        Err(e) => {
            tracing::warn!("{e:#}; running without sound");
            Box::new(SilentPlayer::new())
        }
    };

    let mut controller = TimerController::new(
        settings.duration,
        settings.sound,
        settings.volume,
        library,
        player,
    );

    tracing::info!(
        minutes = settings.duration.get(),
        sound = %settings.sound,
        volume = settings.volume.get(),
        "timer opened"
    );

    let mut terminal = tui::init().context("Failed to initialise terminal")?;
    let outcome = tui::screens::timer::run(&mut terminal, &mut controller);
    tui::restore().context("Failed to restore terminal")?;
    outcome?;

    let session = controller.session();
    let elapsed = session.total_secs() - session.remaining_secs();
    if elapsed > 0 {
        println!(
            "Sat for {} of {}.",
            style(format_clock(elapsed)).green().bold(),
            format_clock(session.total_secs())
        );
    }
    Ok(())
}

/// Print the track table and whether each asset is on disk.
pub fn list_sounds(config: &AppConfig) -> Result<()> {
    let library = config.sound_library();
    let selected = config.audio.sound;

    println!("{}", style("Ambient sounds").bold());
    println!();
    for (sound, path) in library.entries() {
        let marker = if sound == selected { "*" } else { " " };
        let status = if path.exists() {
            style("ok").green()
        } else {
            style("missing").red()
        };
        println!(
            " {marker} {:12} {:8} {}",
            style(sound.name()).cyan(),
            status,
            path.display()
        );
    }

    let missing = library.missing();
    if !missing.is_empty() {
        println!();
        println!(
            "  Put audio files in {} or set [audio.tracks] in {}.",
            style(config.sounds_dir().display()).yellow(),
            paths::config_file().display()
        );
    }
    Ok(())
}

/// Print where meditimer reads and writes its files.
pub fn show_paths(config: &AppConfig, problem: Option<&anyhow::Error>) {
    println!("{:8} {}", style("Config").bold(), paths::config_file().display());
    if let Some(e) = problem {
        println!("{:8} {}", "", style(format!("ignored: {e:#}")).yellow());
    }
    println!("{:8} {}", style("Sounds").bold(), config.sounds_dir().display());
    println!("{:8} {}", style("Log").bold(), paths::log_file().display());
}
