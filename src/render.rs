//! Text rendering of solved mazes.

use std::fmt::{self, Display, Formatter};

use crate::{
    maze::Maze,
    pathfinding::Solution,
    types::{Cell, Coordinate},
};

/// Printable view of a maze and, optionally, the route found through it.
///
/// This structure renders `height` rows of `width` two-character cells, top row first, each row
/// followed by a newline. When several markers apply to the same cell the end wins over the start,
/// the start over the route and the route over a wall.
#[derive(Clone, Copy, Debug)]
pub struct Rendering<'maze> {
    /// Maze to draw.
    maze: &'maze Maze,
    /// Route to draw over the maze, if any.
    solution: Option<&'maze Solution>,
}

impl<'maze> Rendering<'maze> {
    /// Creates a rendering of `maze` with the given route drawn over it.
    #[must_use]
    pub const fn new(maze: &'maze Maze, solution: Option<&'maze Solution>) -> Self {
        Self { maze, solution }
    }

    /// Decides what to draw at `position`.
    fn cell(&self, position: Coordinate) -> Cell {
        if position == self.maze.end() {
            Cell::End
        } else if position == self.maze.start() {
            Cell::Start
        } else if self
            .solution
            .is_some_and(|solution| solution.contains(position))
        {
            Cell::Route
        } else if self.maze.is_wall(position) {
            Cell::Wall
        } else {
            Cell::Open
        }
    }
}

impl Display for Rendering<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.maze.height() {
            for x in 0..self.maze.width() {
                formatter.write_str(self.cell(Coordinate::new(x, y)).glyph())?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}
