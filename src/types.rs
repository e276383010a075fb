//! Type definitions for grid positions, movement directions and rendered cells.

/// Grid position of a maze cell.
///
/// This structure holds a column (`x`) and a row (`y`) index. Rows grow downwards, so the first
/// wall row of a maze file is `y == 0`. Both components are signed because the search probes
/// positions to the north and west of the grid before pruning them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column index, counting from the left edge.
    pub x: i32,
    /// Row index, counting from the top edge.
    pub y: i32,
}

impl Coordinate {
    /// Builds a coordinate from its column and row.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring coordinate one step in the given direction.
    ///
    /// This function yields `None` when the step would overflow the coordinate range, in which case
    /// the neighbour simply does not exist for the purpose of the search.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => Some(Self::new(self.x, self.y.checked_sub(1)?)),
            Direction::East => Some(Self::new(self.x.checked_add(1)?, self.y)),
            Direction::South => Some(Self::new(self.x, self.y.checked_add(1)?)),
            Direction::West => Some(Self::new(self.x.checked_sub(1)?, self.y)),
        }
    }
}

/// Cardinal movement directions.
///
/// This enumeration holds the four moves the search may take from a cell. The order of
/// [`Direction::ALL`] is the order in which neighbours are attempted, and it determines the shape
/// of every route the solver reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous row (`y - 1`).
    North,
    /// Towards the next column (`x + 1`).
    East,
    /// Towards the next row (`y + 1`).
    South,
    /// Towards the previous column (`x - 1`).
    West,
}

impl Direction {
    /// Neighbour priority used by the search.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
}

/// Content of a single rendered cell.
///
/// This enumeration holds the categories a grid position may fall into when the solved maze is
/// drawn. Each variant maps onto a two-character glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// A wall declared in the input file.
    Wall,
    /// A cell committed to the discovered route.
    Route,
    /// The start cell.
    Start,
    /// The end cell.
    End,
    /// Anything else.
    Open,
}

impl Cell {
    /// Returns the two-character glyph drawn for the cell.
    pub(crate) const fn glyph(self) -> &'static str {
        match self {
            Self::Wall => "1 ",
            Self::Route => "X ",
            Self::Start => "S ",
            Self::End => "E ",
            Self::Open => "  ",
        }
    }
}
