//! Generate a random grid maze and find the shortest way through it
//!
//! # Examples
//! ## Solving a generated maze
//! ```
//! use bfs_maze::maze_generator::{MazeConfig, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let mut maze = gen.generate_maze(&MazeConfig::default()).unwrap();
//! let solution = maze.solve();
//! solution.print_report(&maze);
//! ```
//!
//! ## Solving a fixed maze
//! ```
//! use bfs_maze::{EndingCondition, Maze};
//!
//! let mut maze = Maze::parse("S X\n  X\nX  \nX G").unwrap();
//! let solution = maze.solve();
//! assert_eq!(solution.ending_condition, EndingCondition::Found);
//! assert_eq!(solution.steps(), 5);
//! assert_eq!(maze.render(), "S X\n##X\nX# \nX#G");
//! ```

use std::fmt;

use anyhow::{anyhow, bail, Context};
use itertools::Itertools;
use log::trace;

pub mod maze_generator;
pub mod solver;

pub use solver::{breadth_first_search, EndingCondition, MazeSolution};

/// State of a single maze square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    const S_EMPTY: char = ' ';
    const S_BLOCKED: char = 'X';
    const S_START: char = 'S';
    const S_GOAL: char = 'G';
    const S_PATH: char = '#';

    /// Character used for this cell in the text representation
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::S_EMPTY,
            Cell::Blocked => Self::S_BLOCKED,
            Cell::Start => Self::S_START,
            Cell::Goal => Self::S_GOAL,
            Cell::Path => Self::S_PATH,
        }
    }

    /// Inverse of [Self::symbol]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            Self::S_EMPTY => Some(Cell::Empty),
            Self::S_BLOCKED => Some(Cell::Blocked),
            Self::S_START => Some(Cell::Start),
            Self::S_GOAL => Some(Cell::Goal),
            Self::S_PATH => Some(Cell::Path),
            _ => None,
        }
    }
}

/// Location in the maze
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Rectangular maze of [Cell]s with one start and one goal
///
/// Cells only change in two places: the random fill during construction, and
/// [Self::render_path]. Start and goal squares always keep their marks.
#[derive(Clone, Debug)]
pub struct Maze {
    /// Cell states, indexed `[row][column]`
    squares: Vec<Vec<Cell>>,
    rows: usize,
    columns: usize,
    /// Where the search begins
    start: Location,
    /// Location of the final target
    goal: Location,
}

impl Maze {
    /// Create a maze with randomly placed obstacles
    ///
    /// ## Arguments
    /// - `rows`, `columns`: Maze dimensions, both positive.
    /// - `sparseness`: Probability in `[0, 1]` that a square is blocked.
    /// - `random`: Source of uniform values in `[0, 1)`, called once per
    ///   square in row-major order.
    ///
    /// Start is placed at the top left corner and goal at the bottom right
    /// corner, overwriting any obstacle drawn there. In a 1x1 maze both
    /// share the single square, which is marked as goal.
    ///
    /// Returns error, if dimensions are zero or `sparseness` is outside
    /// `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use bfs_maze::{Cell, Location, Maze};
    ///
    /// let maze = Maze::new(2, 3, 0.5, || 0.0).unwrap();
    /// assert_eq!(maze.render(), "SXX\nXXG");
    /// assert_eq!(maze.cell(Location::new(0, 1)), Cell::Blocked);
    /// ```
    pub fn new(
        rows: usize,
        columns: usize,
        sparseness: f64,
        mut random: impl FnMut() -> f64,
    ) -> anyhow::Result<Self> {
        if rows == 0 || columns == 0 {
            bail!("Maze dimensions must be positive, got {}x{}", rows, columns);
        }
        if !(0.0..=1.0).contains(&sparseness) {
            bail!("Sparseness must be within [0, 1], got {}", sparseness);
        }

        let squares: Vec<Vec<Cell>> = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| {
                        if random() < sparseness {
                            Cell::Blocked
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect();

        let mut maze = Maze {
            squares,
            rows,
            columns,
            start: Location::new(0, 0),
            goal: Location::new(rows - 1, columns - 1),
        };
        maze.stamp_endpoints();
        trace!(
            "Generated {}x{} maze with {} blocked squares",
            rows,
            columns,
            maze.blocked_count()
        );
        Ok(maze)
    }

    /// Parse maze from its text representation
    ///
    /// - `text`: One line per row, using the symbols of [Cell::symbol].
    ///   Path marks (`#`) are read as empty squares.
    ///
    /// Returns error, if rows have different lengths, the text contains
    /// unknown characters, or there is not exactly one start and one goal.
    ///
    /// # Examples
    /// ```
    /// use bfs_maze::{Location, Maze};
    ///
    /// let maze = Maze::parse(" S \nX G").unwrap();
    /// assert_eq!(maze.start(), Location::new(0, 1));
    /// assert_eq!(maze.goal(), Location::new(1, 2));
    /// ```
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut start = None;
        let mut goal = None;

        let lines: Vec<&str> = text
            .trim_end_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .collect();
        if lines.is_empty() || lines[0].is_empty() {
            bail!("Maze is empty");
        }
        let columns = lines[0].chars().count();

        let mut squares = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut cells = Vec::with_capacity(columns);
            for (column, c) in line.chars().enumerate() {
                let cell = Cell::from_symbol(c).ok_or_else(|| {
                    anyhow!(
                        "Unexpected character `{}` at row={}, column={}",
                        c,
                        row,
                        column
                    )
                })?;
                let cell = match cell {
                    Cell::Start => {
                        if start.replace(Location::new(row, column)).is_some() {
                            bail!("More than one start in maze");
                        }
                        Cell::Start
                    }
                    Cell::Goal => {
                        if goal.replace(Location::new(row, column)).is_some() {
                            bail!("More than one goal in maze");
                        }
                        Cell::Goal
                    }
                    Cell::Path => Cell::Empty,
                    other => other,
                };
                cells.push(cell);
            }
            if cells.len() != columns {
                bail!(
                    "Row {} has {} squares, expected {}",
                    row,
                    cells.len(),
                    columns
                );
            }
            squares.push(cells);
        }

        Ok(Maze {
            rows: squares.len(),
            columns,
            squares,
            start: start.context("Start not found in maze")?,
            goal: goal.context("Goal not found in maze")?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn goal(&self) -> Location {
        self.goal
    }

    /// State of the square at `loc`
    ///
    /// # Panics
    /// If `loc` is outside the maze.
    pub fn cell(&self, loc: Location) -> Cell {
        self.squares[loc.row][loc.column]
    }

    /// Squares reachable from `loc` with one step
    ///
    /// Only in-bounds, non-blocked squares are returned, in the order
    /// down, up, right, left. A blocked `loc` has no neighbors.
    ///
    /// # Panics
    /// If `loc` is outside the maze.
    pub fn neighbors(&self, loc: Location) -> Vec<Location> {
        if self.cell(loc) == Cell::Blocked {
            return Vec::new();
        }

        let Location { row, column } = loc;
        [
            (row + 1 < self.rows).then(|| Location::new(row + 1, column)),
            row.checked_sub(1).map(|r| Location::new(r, column)),
            (column + 1 < self.columns).then(|| Location::new(row, column + 1)),
            column.checked_sub(1).map(|c| Location::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(|&n| self.cell(n) != Cell::Blocked)
        .collect()
    }

    pub fn is_goal(&self, loc: Location) -> bool {
        loc == self.goal
    }

    /// Mark `path` on the maze
    ///
    /// Start and goal are stamped back after the path, so they keep their
    /// marks even though the path passes through them.
    pub fn render_path(&mut self, path: &[Location]) {
        for loc in path {
            self.squares[loc.row][loc.column] = Cell::Path;
        }
        self.stamp_endpoints();
    }

    /// Text representation, one line per row without a trailing newline
    pub fn render(&self) -> String {
        self.squares
            .iter()
            .map(|row| row.iter().map(|c| c.symbol()).join(""))
            .join("\n")
    }

    fn stamp_endpoints(&mut self) {
        self.squares[self.start.row][self.start.column] = Cell::Start;
        self.squares[self.goal.row][self.goal.column] = Cell::Goal;
    }

    fn blocked_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Blocked)
            .count()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Cell, Location, Maze};

    #[test]
    fn construct_without_obstacles() {
        let maze = Maze::new(3, 4, 0.0, || 0.0).unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.columns(), 4);
        assert_eq!(maze.start(), Location::new(0, 0));
        assert_eq!(maze.goal(), Location::new(2, 3));
        assert_eq!(maze.render(), "S   \n    \n   G");
    }

    #[test]
    fn obstacles_follow_random_source() {
        let mut values = [0.9, 0.1, 0.5, 0.2, 0.3, 0.05].into_iter();
        let maze = Maze::new(2, 3, 0.3, || values.next().unwrap()).unwrap();
        // First and last squares are overwritten with start and goal
        assert_eq!(maze.render(), "SX \nX G");
    }

    #[test]
    fn full_density_keeps_start_and_goal() {
        let maze = Maze::new(3, 3, 1.0, || 0.999).unwrap();
        assert_eq!(maze.render(), "SXX\nXXX\nXXG");
        assert_eq!(maze.cell(maze.start()), Cell::Start);
        assert_eq!(maze.cell(maze.goal()), Cell::Goal);
    }

    #[test]
    fn single_square_is_goal() {
        let maze = Maze::new(1, 1, 0.5, || 0.0).unwrap();
        assert_eq!(maze.start(), maze.goal());
        assert_eq!(maze.render(), "G");
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(Maze::new(0, 3, 0.1, || 0.0).is_err());
        assert!(Maze::new(3, 0, 0.1, || 0.0).is_err());
        assert!(Maze::new(3, 3, -0.1, || 0.0).is_err());
        assert!(Maze::new(3, 3, 1.5, || 0.0).is_err());
        assert!(Maze::new(3, 3, f64::NAN, || 0.0).is_err());
    }

    #[test]
    fn neighbors_order_is_down_up_right_left() {
        let maze = Maze::new(3, 3, 0.0, || 0.0).unwrap();
        assert_eq!(
            maze.neighbors(Location::new(1, 1)),
            vec![
                Location::new(2, 1),
                Location::new(0, 1),
                Location::new(1, 2),
                Location::new(1, 0),
            ]
        );
        assert_eq!(
            maze.neighbors(Location::new(0, 0)),
            vec![Location::new(1, 0), Location::new(0, 1)]
        );
        assert_eq!(
            maze.neighbors(Location::new(2, 2)),
            vec![Location::new(1, 2), Location::new(2, 1)]
        );
    }

    #[test]
    fn neighbors_skip_blocked_squares() {
        let maze = Maze::parse("S X\n X \n  G").unwrap();
        assert_eq!(
            maze.neighbors(Location::new(0, 1)),
            vec![Location::new(0, 0)]
        );
        assert!(maze.neighbors(Location::new(1, 1)).is_empty());
    }

    #[test]
    fn render_path_restamps_endpoints() {
        let mut maze = Maze::new(2, 2, 0.0, || 0.0).unwrap();
        maze.render_path(&[
            Location::new(0, 0),
            Location::new(1, 0),
            Location::new(1, 1),
        ]);
        assert_eq!(maze.render(), "S \n#G");
    }

    #[test]
    fn render_path_on_single_square() {
        let mut maze = Maze::new(1, 1, 0.0, || 0.0).unwrap();
        maze.render_path(&[Location::new(0, 0)]);
        assert_eq!(maze.cell(Location::new(0, 0)), Cell::Goal);
    }

    #[test]
    fn render_is_idempotent() {
        let maze = Maze::parse("S X\n X \nX G").unwrap();
        assert_eq!(maze.render(), maze.render());
        assert_eq!(maze.to_string(), maze.render());
    }

    #[test]
    fn parse_rendered_solution() {
        let maze = Maze::parse("S##\nX #\n  G\n").unwrap();
        assert_eq!(maze.cell(Location::new(0, 1)), Cell::Empty);
        assert_eq!(maze.render(), "S  \nX  \n  G");
    }

    #[test]
    fn parse_errors() {
        assert!(Maze::parse("").is_err());
        assert!(Maze::parse("S  \n G").is_err());
        assert!(Maze::parse("S?\n G").is_err());
        assert!(Maze::parse("S \n  ").is_err());
        assert!(Maze::parse("SS\n G").is_err());
        assert!(Maze::parse("SG\nG ").is_err());
    }

    proptest! {
        #[test]
        fn neighbors_are_adjacent_and_open(
            rows in 1usize..6,
            columns in 1usize..6,
            seed in proptest::collection::vec(0.0f64..1.0, 36),
        ) {
            let mut values = seed.into_iter();
            let maze = Maze::new(rows, columns, 0.3, || values.next().unwrap_or(0.5)).unwrap();
            for row in 0..rows {
                for column in 0..columns {
                    let loc = Location::new(row, column);
                    for n in maze.neighbors(loc) {
                        let distance = n.row.abs_diff(row) + n.column.abs_diff(column);
                        prop_assert_eq!(distance, 1);
                        prop_assert!(n.row < rows && n.column < columns);
                        prop_assert_ne!(maze.cell(n), Cell::Blocked);
                    }
                }
            }
        }
    }
}
