//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use log::info;

use bfs_maze::maze_generator::{MazeConfig, MazeGenerator};
use bfs_maze::Maze;

/// The shortest way through a random maze, found with breadth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height
    #[arg(long, default_value_t = MazeConfig::DEFAULT_ROWS, conflicts_with = "file")]
    rows: usize,

    /// Generated maze width
    #[arg(long, default_value_t = MazeConfig::DEFAULT_COLUMNS, conflicts_with = "file")]
    columns: usize,

    /// Probability of each square being blocked
    #[arg(long, default_value_t = MazeConfig::DEFAULT_SPARSENESS, conflicts_with = "file")]
    sparseness: f64,

    /// Random seed
    #[arg(long, conflicts_with = "file")]
    seed: Option<u64>,

    /// File, where to read the maze instead of generating one. Use `-` for stdin.
    file: Option<PathBuf>,
}

/// Read maze from `file`, or from stdin if `file` is `-`
fn read_maze(file: &Path) -> anyhow::Result<Maze> {
    let text = if file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Cannot read maze from stdin")?;
        buf
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Cannot read maze from {}", file.display()))?
    };
    Maze::parse(&text)
}

/// Generate or read maze, print solution
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut maze = match args.file {
        Some(file) => read_maze(&file)?,
        None => {
            let config = MazeConfig {
                rows: args.rows,
                columns: args.columns,
                sparseness: args.sparseness,
            };
            MazeGenerator::new(args.seed).generate_maze(&config)?
        }
    };
    info!("Solving {}x{} maze", maze.rows(), maze.columns());

    let solution = maze.solve();
    solution.print_report(&maze);
    Ok(())
}
