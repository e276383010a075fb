//! Core application logic for the maze solver.

use std::{
    io::Write,
    path::{self, PathBuf},
    process::ExitCode,
};

use color_eyre::eyre::{Result, WrapErr as _};
use log::info;

use crate::{
    cli::Cli,
    file_loader::{self, Validation},
    maze::Maze,
    pathfinding::{self, Bounds},
    render::Rendering,
};

/// Message printed when the search finds no route.
const NO_ROUTE_MESSAGE: &str = "No route found.";

/// Final state of a run that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A route was found and the solved maze was printed.
    Solved,
    /// The search found no route.
    NoRoute,
}

impl Outcome {
    /// Returns the process exit status for the outcome.
    #[must_use]
    pub const fn status(self) -> u8 {
        match self {
            Self::Solved => 0,
            Self::NoRoute => 1,
        }
    }

    /// Returns the process exit code for the outcome.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Application state for one solver run.
///
/// This structure holds the settings taken from the command line. A run loads the maze file it was
/// given, solves it and writes the result to the given output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct App {
    /// Maze description file.
    input: PathBuf,
    /// Edge pruning rule for the search.
    bounds: Bounds,
    /// Header checking applied by the loader.
    validation: Validation,
}

impl From<Cli> for App {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            bounds: if cli.bounded {
                Bounds::Declared
            } else {
                Bounds::NonNegative
            },
            validation: if cli.strict {
                Validation::Strict
            } else {
                Validation::Lenient
            },
        }
    }
}

impl App {
    /// Creates an application that solves `input` with the given settings.
    #[must_use]
    pub const fn new(input: PathBuf, bounds: Bounds, validation: Validation) -> Self {
        Self {
            input,
            bounds,
            validation,
        }
    }

    /// Runs the solver once.
    ///
    /// This function writes the absolute path of the input file, then either the no-route message
    /// or the solved maze, to `out`.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The input path cannot be made absolute
    /// - The maze file cannot be loaded
    /// - Writing to `out` fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Outcome> {
        let input = path::absolute(&self.input)
            .wrap_err_with(|| format!("failed to resolve {}", self.input.display()))?;
        info!("reading maze from {}", input.display());
        writeln!(out, "{}", input.display())?;

        let maze = file_loader::load(&input, self.validation)?;
        info!(
            "loaded {}x{} maze from {:?} to {:?} with {} walls",
            maze.width(),
            maze.height(),
            maze.start(),
            maze.end(),
            maze.walls().len()
        );

        self.report(&maze, out)
    }

    /// Solves an already loaded maze and writes the result to `out`.
    fn report<W: Write>(&self, maze: &Maze, out: &mut W) -> Result<Outcome> {
        let Some(solution) = pathfinding::solve(maze, self.bounds) else {
            info!("no route found");
            writeln!(out, "{NO_ROUTE_MESSAGE}")?;
            return Ok(Outcome::NoRoute);
        };

        info!("found a route through {} cells", solution.len());
        write!(out, "{}", Rendering::new(maze, Some(&solution)))?;

        Ok(Outcome::Solved)
    }
}
