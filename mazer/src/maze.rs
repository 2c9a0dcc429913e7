//! Text maze parsing.
//!
//! A maze is an ASCII block where `#` is a wall, `S` the start marker,
//! `E` the end marker, space or `.` a unit-cost floor, and a digit
//! `1`..`9` a floor costing that much to enter. Every line must have the
//! same width, and exactly one `S` and one `E` must be present.

use std::fmt;

use pathgrid_core::{Cell, Grid, GridError, Point};

/// A parsed maze: the grid plus its start and goal markers.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

/// Errors raised while parsing a maze description.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The input contains no lines.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth { line: usize },
    /// A character outside the permitted set.
    InvalidMarker { ch: char, pos: Point },
    /// No `S` marker.
    MissingStart,
    /// No `E` marker.
    MissingEnd,
    /// More than one `S` marker.
    DuplicateStart(Point),
    /// More than one `E` marker.
    DuplicateEnd(Point),
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze is empty"),
            Self::InconsistentWidth { line } => {
                write!(f, "maze line {line} has a different width than line 0")
            }
            Self::InvalidMarker { ch, pos } => {
                write!(f, "maze contains invalid character {ch:?} at {pos}")
            }
            Self::MissingStart => write!(f, "maze has no start marker 'S'"),
            Self::MissingEnd => write!(f, "maze has no end marker 'E'"),
            Self::DuplicateStart(p) => write!(f, "maze has a second start marker at {p}"),
            Self::DuplicateEnd(p) => write!(f, "maze has a second end marker at {p}"),
            Self::Grid(err) => write!(f, "maze grid: {err}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for MazeError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl Maze {
    /// Parse a maze from its textual description.
    ///
    /// Leading and trailing blank lines are ignored; interior lines are
    /// taken as-is apart from a trailing `\r`.
    pub fn parse(input: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = input
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let lines = trim_blank(&lines);
        if lines.is_empty() {
            return Err(MazeError::Empty);
        }

        let width = lines[0].chars().count();
        let height = lines.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(MazeError::InconsistentWidth { line: y });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let cell = match ch {
                    '#' => Cell::wall(),
                    ' ' | '.' => Cell::floor(),
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(MazeError::DuplicateStart(pos));
                        }
                        Cell::floor()
                    }
                    'E' => {
                        if goal.replace(pos).is_some() {
                            return Err(MazeError::DuplicateEnd(pos));
                        }
                        Cell::floor()
                    }
                    d @ '1'..='9' => Cell::floor().with_weight((d as u8 - b'0') as f32),
                    other => return Err(MazeError::InvalidMarker { ch: other, pos }),
                };
                cells.push(cell);
            }
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let goal = goal.ok_or(MazeError::MissingEnd)?;
        let grid = Grid::from_fn(width as i32, height as i32, |p| {
            cells[(p.y as usize) * width + (p.x as usize)]
        })?;

        Ok(Self { grid, start, goal })
    }
}

/// Strip leading and trailing blank lines.
fn trim_blank<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let skip_front = lines.iter().take_while(|l| l.trim().is_empty()).count();
    if skip_front == lines.len() {
        return Vec::new();
    }
    let skip_back = lines
        .iter()
        .rev()
        .take_while(|l| l.trim().is_empty())
        .count();
    lines[skip_front..lines.len() - skip_back].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
#####
#S.2#
#.#.#
#..E#
#####";

    #[test]
    fn parse_basics() {
        let maze = Maze::parse(MAZE).unwrap();
        assert_eq!(maze.grid.size(), Point::new(5, 5));
        assert_eq!(maze.start, Point::new(1, 1));
        assert_eq!(maze.goal, Point::new(3, 3));
        assert!(!maze.grid.cell_at(Point::new(0, 0)).walkable);
        assert!(!maze.grid.cell_at(Point::new(2, 2)).walkable);
        assert!(maze.grid.cell_at(maze.start).walkable);
        assert_eq!(maze.grid.cell_at(Point::new(3, 1)).weight, 2.0);
    }

    #[test]
    fn surrounding_blank_lines_ignored() {
        // Both empty and whitespace-only lines count as blank.
        let maze = Maze::parse(&format!("\n  \n{MAZE}\n \n\n")).unwrap();
        assert_eq!(maze.grid.size(), Point::new(5, 5));
        assert_eq!(maze.start, Point::new(1, 1));
    }

    #[test]
    fn empty_input() {
        assert_eq!(Maze::parse("").unwrap_err(), MazeError::Empty);
        assert_eq!(Maze::parse("\n  \n").unwrap_err(), MazeError::Empty);
    }

    #[test]
    fn inconsistent_width() {
        assert_eq!(
            Maze::parse("###\n####\n###").unwrap_err(),
            MazeError::InconsistentWidth { line: 1 }
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Maze::parse("S?E").unwrap_err(),
            MazeError::InvalidMarker {
                ch: '?',
                pos: Point::new(1, 0)
            }
        );
    }

    #[test]
    fn missing_markers() {
        assert_eq!(Maze::parse("..E").unwrap_err(), MazeError::MissingStart);
        assert_eq!(Maze::parse("S..").unwrap_err(), MazeError::MissingEnd);
    }

    #[test]
    fn duplicate_markers() {
        assert_eq!(
            Maze::parse("SSE").unwrap_err(),
            MazeError::DuplicateStart(Point::new(1, 0))
        );
        assert_eq!(
            Maze::parse("SEE").unwrap_err(),
            MazeError::DuplicateEnd(Point::new(2, 0))
        );
    }

    #[test]
    fn parsed_maze_is_solvable() {
        let maze = Maze::parse(MAZE).unwrap();
        let path = pathgrid_search::find_path(&maze.grid, maze.start, maze.goal).unwrap();
        assert_eq!(path.first(), Some(&maze.start));
        assert_eq!(path.last(), Some(&maze.goal));
        // Around the central wall, cheaper than entering the 2-cell.
        assert_eq!(path.len(), 5);
    }
}
