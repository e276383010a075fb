//! This crate contains the source code for the binary of the maze solver mazetrace.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::{io, process::ExitCode};

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazetrace::{init_logging, App, Cli};

fn main() -> Result<ExitCode> {
    install()?;
    init_logging();

    let app = App::from(Cli::parse());
    let outcome = app.run(&mut io::stdout().lock())?;

    Ok(outcome.exit_code())
}
