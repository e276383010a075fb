//! Maze data module.
//!
//! This module contains the `Maze` struct, which holds the declared dimensions, the start and end
//! cells and the wall layout of a loaded maze.

use std::collections::HashSet;

use crate::types::Coordinate;

/// Immutable maze description.
///
/// This structure represents a maze as read from an input file. The declared `width` and `height`
/// size the rendered output; walls, start and end are expected, but not required, to lie inside
/// that rectangle. Walls outside it are kept and simply never reached by an in-bounds search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cell the search starts from.
    start: Coordinate,
    /// Cell the search is looking for.
    end: Coordinate,
    /// Cells that cannot be entered.
    walls: HashSet<Coordinate>,
    /// Declared number of columns.
    width: i32,
    /// Declared number of rows.
    height: i32,
}

impl Maze {
    /// Builds a maze from its parts.
    #[must_use]
    pub const fn new(
        start: Coordinate,
        end: Coordinate,
        walls: HashSet<Coordinate>,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            start,
            end,
            walls,
            width,
            height,
        }
    }

    /// Returns the start cell.
    #[must_use]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Returns the end cell.
    #[must_use]
    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// Returns the declared number of columns.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Returns the declared number of rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns the set of wall cells.
    #[must_use]
    pub const fn walls(&self) -> &HashSet<Coordinate> {
        &self.walls
    }

    /// Checks whether the given cell is a wall.
    #[must_use]
    pub fn is_wall(&self, position: Coordinate) -> bool {
        self.walls.contains(&position)
    }

    /// Checks whether the given cell lies inside the declared `width` by `height` rectangle.
    #[must_use]
    pub const fn contains(&self, position: Coordinate) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }
}
