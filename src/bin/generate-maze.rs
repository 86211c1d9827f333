//! CLI for maze generation

use clap::Parser;
use log::info;

use bfs_maze::maze_generator::{MazeConfig, MazeGenerator};

/// Random maze generator, output can be piped to `solve-maze -`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height
    #[arg(long, default_value_t = MazeConfig::DEFAULT_ROWS)]
    rows: usize,

    /// Generated maze width
    #[arg(long, default_value_t = MazeConfig::DEFAULT_COLUMNS)]
    columns: usize,

    /// Probability of each square being blocked
    #[arg(long, default_value_t = MazeConfig::DEFAULT_SPARSENESS)]
    sparseness: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it unsolved
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig {
        rows: args.rows,
        columns: args.columns,
        sparseness: args.sparseness,
    };
    info!("Generating maze from {:?}", config);
    let maze = MazeGenerator::new(args.seed).generate_maze(&config)?;
    println!("{}", maze);
    Ok(())
}
