//! Breadth-first search from start to goal

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::{Location, Maze};

/// Solution to the maze
#[derive(Clone, Debug)]
pub struct MazeSolution {
    /// The squares on the shortest path, including start & goal.
    /// Empty, if the goal cannot be reached.
    pub path: Vec<Location>,
    /// Search status
    pub ending_condition: EndingCondition,
}

/// How the search ended
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum EndingCondition {
    /// Goal was reached
    Found,
    /// Every reachable square was explored without reaching the goal
    Exhausted,
}

/// Find the shortest path from start to goal
///
/// Every queue entry carries its own copy of the path walked so far, so the
/// winning path needs no reconstruction. Squares are marked visited when they
/// are enqueued, which keeps each square in the queue at most once.
/// Neighbors are expanded in [Maze::neighbors] order, which decides between
/// equally short paths.
///
/// Returns `None` if the goal is unreachable.
///
/// # Panics
/// If an empty path ends up in the queue. Every queued path starts with the
/// start square, so this cannot happen.
pub fn breadth_first_search(maze: &Maze) -> Option<Vec<Location>> {
    let mut queue: VecDeque<Vec<Location>> = VecDeque::from([vec![maze.start()]]);
    let mut visited: HashSet<Location> = HashSet::from([maze.start()]);
    let mut expanded = 0usize;

    while let Some(path) = queue.pop_front() {
        let current = path[path.len() - 1];
        if maze.is_goal(current) {
            debug!(
                "Reached goal after expanding {} squares, path has {} steps",
                expanded,
                path.len() - 1
            );
            return Some(path);
        }
        expanded += 1;

        for next in maze.neighbors(current) {
            if visited.insert(next) {
                let mut next_path = path.clone();
                next_path.push(next);
                queue.push_back(next_path);
            }
        }
    }

    debug!(
        "Search exhausted after expanding {} of {} squares",
        expanded,
        maze.rows() * maze.columns()
    );
    None
}

impl Maze {
    /// Solve maze
    ///
    /// Find the shortest path from start to goal and mark it on the maze.
    /// If there is none, the maze is left as it was.
    pub fn solve(&mut self) -> MazeSolution {
        match breadth_first_search(self) {
            Some(path) => {
                self.render_path(&path);
                MazeSolution {
                    path,
                    ending_condition: EndingCondition::Found,
                }
            }
            None => MazeSolution {
                path: Vec::new(),
                ending_condition: EndingCondition::Exhausted,
            },
        }
    }
}

impl MazeSolution {
    /// Number of moves from start to goal
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Solved maze and path length, or a note that there is no way through
    pub fn report(&self, maze: &Maze) -> String {
        match self.ending_condition {
            EndingCondition::Found => format!(
                "{}\nThe shortest path is {} steps.",
                maze.render(),
                self.steps()
            ),
            EndingCondition::Exhausted => "No solution".to_string(),
        }
    }

    /// Print report
    pub fn print_report(&self, maze: &Maze) {
        println!("{}", self.report(maze));
    }
}
