//! Terminal rendering of a maze and its solution.

use std::collections::HashSet;

use crossterm::style::Stylize;

use pathgrid_core::Point;

use crate::maze::Maze;

/// Render the maze with `path` overlaid, one styled character per cell.
///
/// Start, end and path cells are green; walls and weighted floors are
/// dark grey; unit floors are blank.
pub fn render(maze: &Maze, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let grid = &maze.grid;

    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let cell = grid.cell_at(p);
            if p == maze.start {
                out.push_str(&'S'.green().to_string());
            } else if p == maze.goal {
                out.push_str(&'E'.green().to_string());
            } else if !cell.walkable {
                out.push_str(&'\u{25A0}'.dark_grey().to_string());
            } else if on_path.contains(&p) {
                out.push_str(&'*'.green().to_string());
            } else if cell.weight != 1.0 {
                // Weighted floors keep their digit so the detour is visible.
                let d = char::from_digit(cell.weight as u32, 10).unwrap_or('?');
                out.push_str(&d.dark_grey().to_string());
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
