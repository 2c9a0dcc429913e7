use std::fmt;

use pathgrid_core::Point;

/// Errors returned by [`find_path`](crate::find_path).
///
/// The variants are deliberately distinct so callers can treat bad input
/// (`OutOfBounds`, `Unwalkable`) differently from the legitimate "no route
/// exists" outcome (`NoPathFound`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// Start or goal coordinate lies outside the grid.
    OutOfBounds(Point),
    /// Start or goal cell is blocked.
    Unwalkable(Point),
    /// The frontier was exhausted without reaching the goal.
    NoPathFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is out of grid bounds"),
            Self::Unwalkable(p) => write!(f, "cell at {p} is not walkable"),
            Self::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for PathError {}
