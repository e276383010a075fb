//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Finds a route through a maze file with depth-first search and prints it.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Maze description file, resolved against the working directory.
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,
    /// Stop the search at the declared width and height instead of only at negative positions.
    #[arg(long)]
    pub bounded: bool,
    /// Reject files whose rows, columns or endpoints disagree with the declared dimensions.
    #[arg(long)]
    pub strict: bool,
}
