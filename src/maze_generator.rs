//! Random maze generation

use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Maze;

/// Construction parameters of a random maze
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    /// Probability that a square is blocked, within `[0, 1]`
    pub sparseness: f64,
}

impl MazeConfig {
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLUMNS: usize = 10;
    pub const DEFAULT_SPARSENESS: f64 = 0.15;
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            columns: Self::DEFAULT_COLUMNS,
            sparseness: Self::DEFAULT_SPARSENESS,
        }
    }
}

/// Maze generator with an optionally seeded random source.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Generator seeded with `seed`, or from system entropy
    ///
    /// The same seed always yields the same sequence of mazes.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate maze with obstacles scattered uniformly at random
    ///
    /// Returns error, if `config` does not describe a valid maze.
    pub fn generate_maze(&mut self, config: &MazeConfig) -> anyhow::Result<Maze> {
        Maze::new(config.rows, config.columns, config.sparseness, || {
            self.random.gen::<f64>()
        })
        .with_context(|| format!("Cannot generate maze from {:?}", config))
    }
}
