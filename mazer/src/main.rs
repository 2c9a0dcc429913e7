//! mazer — solve a text maze and print the result.
//!
//! Reads a maze file (path from the first argument, or the bundled
//! sample), runs the A* search, and prints the timing, path length and
//! the maze with the path overlaid.

mod maze;
mod render;

use std::time::Instant;

use pathgrid_search::{PathError, find_path};

use maze::Maze;

const DEFAULT_MAZE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/maze-1.txt");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MAZE.to_string());
    let text = std::fs::read_to_string(&file)?;
    let maze = Maze::parse(&text)?;

    let started = Instant::now();
    let result = find_path(&maze.grid, maze.start, maze.goal);
    let elapsed = started.elapsed();

    match result {
        Ok(path) => {
            println!(
                "Path found in: {} s {} ms {} µs",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                elapsed.subsec_micros() % 1_000
            );
            println!("Path length:   {} nodes\n", path.len());
            print!("{}", render::render(&maze, &path));
            Ok(())
        }
        Err(err @ PathError::NoPathFound) => {
            // Still show the maze so the disconnection is visible.
            print!("{}", render::render(&maze, &[]));
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
