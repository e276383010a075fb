//! This crate contains the library behind the `mazetrace` maze solver.
//!
//! A maze file is loaded into a [`Maze`], walked from its start towards its end with a depth-first
//! search that tries north, east, south and west in that order, and printed as a grid of
//! two-character cells with the route marked.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod file_loader;
mod maze;
mod pathfinding;
mod render;
mod types;

use env_logger::Env;

pub use crate::{
    app::{App, Outcome},
    cli::Cli,
    file_loader::{load, parse, Validation},
    maze::Maze,
    pathfinding::{solve, Bounds, Solution},
    render::Rendering,
    types::{Coordinate, Direction},
};

/// Installs the logger used by the solver.
///
/// Records are written to standard error so they never mix with the rendered maze. The filter
/// defaults to `warn` and can be changed through the `RUST_LOG` environment variable.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
