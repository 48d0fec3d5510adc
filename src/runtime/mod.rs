use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::app::Player;
use crate::audio::RodioBackend;
use crate::dialog::NativeDialog;

mod cli;
mod command;
mod event_loop;
mod logging;
mod settings;
mod startup;

pub use cli::Cli;
pub use command::Command;
pub use event_loop::Console;


pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    let settings = settings::load_settings(cli.config.as_deref())?;

    let backend =
        RodioBackend::open(&settings.audio).context("failed to initialize audio output")?;
    let mut player = Player::new(backend);
    startup::preload(&mut player, &cli.paths, &settings.library);

    let picker = NativeDialog::from_settings(&settings.dialog, &settings.library);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    event_loop::run(&mut player, &picker, &settings.library, &mut console)
        .context("console I/O failed")?;

    info!("bye");
    Ok(())
}
