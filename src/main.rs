mod audio;
mod cli;
mod commands;
mod config;
mod logging;
mod paths;
mod sound;
mod timer;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::{AppConfig, Overrides};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = Overrides::from(&cli.session);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let _log_guard = logging::init(cli.verbose)?;
            commands::run_timer(&load(overrides)?)
        }
        Command::Sounds => commands::list_sounds(&load(overrides)?),
        Command::Paths => {
            // Still useful for locating a config file that fails to parse.
            let (mut config, problem) = config::load_config_or_default();
            config.apply(overrides);
            commands::show_paths(&config, problem.as_ref());
            Ok(())
        }
    }
}

fn load(overrides: Overrides) -> Result<AppConfig> {
    let mut config = config::load_config()?;
    config.apply(overrides);
    Ok(config)
}
