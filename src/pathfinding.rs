//! Pathfinding algorithm module.
//!
//! This module contains the depth-first search that walks a maze from its start cell towards its
//! end cell. Cells are committed to the route when they are entered and released again when every
//! neighbour behind them turns out to be a dead end.

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    maze::Maze,
    types::{Coordinate, Direction},
};

/// Pruning rule applied to the edges of the grid.
///
/// This enumeration selects which positions outside the maze the search may wander into. The
/// declared dimensions are only an upper bound when [`Bounds::Declared`] is chosen; otherwise a
/// maze without an enclosing wall lets the search run away to the east or south.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Bounds {
    /// Prune positions with a negative column or row only.
    #[default]
    NonNegative,
    /// Prune positions outside the declared `width` by `height` rectangle.
    Declared,
}

impl Bounds {
    /// Checks whether the search may step onto `position`.
    fn admits(self, maze: &Maze, position: Coordinate) -> bool {
        match self {
            Self::NonNegative => position.x >= 0 && position.y >= 0,
            Self::Declared => maze.contains(position),
        }
    }
}

/// Route discovered by the search.
///
/// This structure holds the cells committed to the route in walk order, starting with the start
/// cell. The end cell is never part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Route cells from the start onwards.
    cells: Vec<Coordinate>,
    /// The same cells, for membership queries.
    members: HashSet<Coordinate>,
}

impl Solution {
    /// Builds a solution from an ordered list of cells.
    fn new(cells: Vec<Coordinate>) -> Self {
        let members = cells.iter().copied().collect();
        Self { cells, members }
    }

    /// Returns the route cells in walk order.
    #[must_use]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Checks whether `position` is part of the route.
    #[must_use]
    pub fn contains(&self, position: Coordinate) -> bool {
        self.members.contains(&position)
    }

    /// Returns the number of route cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether the route holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Result of trying to step onto a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    /// The cell is the end of the maze.
    Reached,
    /// The cell is a wall, out of bounds or already on the route.
    Blocked,
    /// The cell was committed to the route and its neighbours are pending.
    Entered,
}

/// Pending work for one committed cell.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Committed cell.
    position: Coordinate,
    /// Index into [`Direction::ALL`] of the next neighbour to try.
    next: usize,
}

/// Search session state.
///
/// This structure holds the route being built while the maze is walked. Each frame on `frames`
/// stands for one level of the recursive formulation of the search, so the route is exactly the
/// positions of the frames, in order.
pub(crate) struct Solver<'maze> {
    /// Maze being solved.
    maze: &'maze Maze,
    /// Edge pruning rule.
    bounds: Bounds,
    /// Cells currently committed to the route.
    path: HashSet<Coordinate>,
    /// Committed cells with their remaining neighbours.
    frames: Vec<Frame>,
    /// Number of cells entered so far, backtracked ones included.
    expanded: usize,
}

impl<'maze> Solver<'maze> {
    /// Creates an empty search session over `maze`.
    pub(crate) fn new(maze: &'maze Maze, bounds: Bounds) -> Self {
        Self {
            maze,
            bounds,
            path: HashSet::new(),
            frames: Vec::new(),
            expanded: 0,
        }
    }

    /// Walks the maze from its start cell.
    ///
    /// This function returns `true` as soon as the end cell is reached. Neighbours are tried in the
    /// order of [`Direction::ALL`] and the first one that leads to the end wins. A cell whose four
    /// neighbours all fail is removed from the route again before the search moves back to the
    /// cell it came from.
    pub(crate) fn search(&mut self) -> bool {
        match self.probe(self.maze.start()) {
            Probe::Reached => return true,
            Probe::Blocked => return false,
            Probe::Entered => {}
        }

        while let Some(frame) = self.frames.last_mut() {
            let position = frame.position;
            let direction = Direction::ALL.get(frame.next).copied();
            frame.next += 1;

            let Some(direction) = direction else {
                trace!("backtracking from {position:?}");
                let _ = self.path.remove(&position);
                let _ = self.frames.pop();
                continue;
            };

            let Some(neighbour) = position.step(direction) else {
                continue;
            };

            if self.probe(neighbour) == Probe::Reached {
                return true;
            }
        }

        false
    }

    /// Tries to step onto `position`, committing it to the route when it is free.
    fn probe(&mut self, position: Coordinate) -> Probe {
        if position == self.maze.end() {
            return Probe::Reached;
        }

        if self.maze.is_wall(position)
            || !self.bounds.admits(self.maze, position)
            || !self.path.insert(position)
        {
            return Probe::Blocked;
        }

        self.frames.push(Frame { position, next: 0 });
        self.expanded += 1;

        Probe::Entered
    }

    /// Returns the committed route, or `None` when no cell was committed.
    pub(crate) fn into_solution(self) -> Option<Solution> {
        if self.path.is_empty() {
            return None;
        }

        Some(Solution::new(
            self.frames.iter().map(|frame| frame.position).collect(),
        ))
    }
}

/// Searches `maze` for a route from its start to its end.
///
/// This function returns `None` when the search leaves no cell committed to the route. That is the
/// case when the start is blocked, when every branch dead-ends, and also when the start already is
/// the end, since the end cell itself is never added.
#[must_use]
pub fn solve(maze: &Maze, bounds: Bounds) -> Option<Solution> {
    let mut solver = Solver::new(maze, bounds);
    let found = solver.search();

    debug!(
        "search {} after entering {} cells",
        if found { "reached the end" } else { "failed" },
        solver.expanded
    );

    solver.into_solution()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a maze from a list of wall positions.
    fn create_test_maze(
        start: (i32, i32),
        end: (i32, i32),
        walls: &[(i32, i32)],
        width: i32,
        height: i32,
    ) -> Maze {
        Maze::new(
            Coordinate::new(start.0, start.1),
            Coordinate::new(end.0, end.1),
            walls.iter().map(|&(x, y)| Coordinate::new(x, y)).collect(),
            width,
            height,
        )
    }

    /// Converts pairs into coordinates.
    fn coords(cells: &[(i32, i32)]) -> Vec<Coordinate> {
        cells.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
    }

    /// Maze whose only route leaves the declared grid to the east and comes back.
    fn create_detour_maze() -> Maze {
        create_test_maze(
            (0, 0),
            (0, 2),
            &[
                (0, 1),
                (1, 1),
                (3, 0),
                (3, 1),
                (3, 2),
                (3, 3),
                (0, 3),
                (1, 3),
                (2, 3),
            ],
            2,
            3,
        )
    }

    #[test]
    fn test_start_equals_end() {
        let maze = create_test_maze((2, 2), (2, 2), &[], 5, 5);
        let mut solver = Solver::new(&maze, Bounds::NonNegative);

        assert!(solver.search());
        assert!(solver.path.is_empty());
        assert_eq!(solver.into_solution(), None);
    }

    #[test]
    fn test_straight_corridor() {
        let maze = create_test_maze((0, 0), (3, 0), &[], 4, 1);

        let solution = solve(&maze, Bounds::NonNegative).expect("expected a route");

        assert_eq!(solution.cells(), coords(&[(0, 0), (1, 0), (2, 0)]).as_slice());
        assert!(!solution.contains(Coordinate::new(3, 0)));
    }

    #[test]
    fn test_u_shaped_route_with_dead_end() {
        let maze = create_test_maze(
            (1, 1),
            (4, 1),
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (5, 0),
                (0, 1),
                (3, 1),
                (5, 1),
                (0, 2),
                (2, 2),
                (3, 2),
                (5, 2),
                (0, 3),
                (5, 3),
                (0, 4),
                (1, 4),
                (2, 4),
                (3, 4),
                (4, 4),
                (5, 4),
            ],
            6,
            5,
        );

        let solution = solve(&maze, Bounds::NonNegative).expect("expected a route");

        assert_eq!(
            solution.cells(),
            coords(&[(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (4, 3), (4, 2)]).as_slice()
        );
        assert!(!solution.contains(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_negative_start_is_pruned() {
        let maze = create_test_maze((-1, 0), (2, 0), &[], 3, 1);
        let mut solver = Solver::new(&maze, Bounds::NonNegative);

        assert!(!solver.search());
        assert!(solver.path.is_empty());
        assert_eq!(solve(&maze, Bounds::NonNegative), None);

        let maze = create_test_maze((0, -3), (2, 0), &[], 3, 1);
        assert_eq!(solve(&maze, Bounds::NonNegative), None);
    }

    #[test]
    fn test_enclosed_start() {
        let maze = create_test_maze((1, 1), (3, 3), &[(1, 0), (2, 1), (1, 2), (0, 1)], 5, 5);
        let mut solver = Solver::new(&maze, Bounds::NonNegative);

        assert!(!solver.search());
        assert!(solver.path.is_empty());
        assert!(solver.frames.is_empty());
        assert_eq!(solver.expanded, 1);
    }

    #[test]
    fn test_start_on_wall() {
        let maze = create_test_maze((0, 0), (1, 0), &[(0, 0)], 2, 1);

        assert_eq!(solve(&maze, Bounds::NonNegative), None);
    }

    #[test]
    fn test_failed_search_releases_every_cell() {
        let maze = create_test_maze((0, 0), (3, 0), &[(2, 0), (2, 1)], 3, 2);
        let mut solver = Solver::new(&maze, Bounds::Declared);

        assert!(!solver.search());
        assert!(solver.path.is_empty());
        assert!(solver.expanded > 1);
    }

    #[test]
    fn test_route_may_leave_declared_grid() {
        let maze = create_detour_maze();

        let solution = solve(&maze, Bounds::NonNegative).expect("expected a route");

        assert_eq!(
            solution.cells(),
            coords(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2)]).as_slice()
        );
    }

    #[test]
    fn test_declared_bounds_prune_detour() {
        let maze = create_detour_maze();

        assert_eq!(solve(&maze, Bounds::Declared), None);
    }

    #[test]
    fn test_declared_bounds_keep_inner_routes() {
        let maze = create_test_maze((0, 0), (2, 2), &[], 3, 3);

        let solution = solve(&maze, Bounds::Declared).expect("expected a route");

        assert_eq!(
            solution.cells(),
            coords(&[(0, 0), (1, 0), (2, 0), (2, 1)]).as_slice()
        );
    }

    #[test]
    fn test_long_corridor_does_not_exhaust_stack() {
        let maze = create_test_maze((0, 0), (200_000, 0), &[], 200_001, 1);

        let solution = solve(&maze, Bounds::NonNegative).expect("expected a route");

        assert_eq!(solution.len(), 200_000);
        assert_eq!(solution.cells().last(), Some(&Coordinate::new(199_999, 0)));
    }

    #[test]
    fn test_solution_membership() {
        let solution = Solution::new(coords(&[(0, 0), (0, 1)]));

        assert!(solution.contains(Coordinate::new(0, 1)));
        assert!(!solution.contains(Coordinate::new(1, 1)));
        assert_eq!(solution.len(), 2);
        assert!(!solution.is_empty());
    }
}
