//! **pathgrid-core** — grid and cell model for weighted 2D pathfinding.
//!
//! This crate provides the data model the *pathgrid* search operates on: a
//! geometry primitive ([`Point`]), per-cell walkability and traversal cost
//! ([`Cell`]), and a dense immutable grid of cells ([`Grid`]).

pub mod cell;
pub mod grid;
pub mod point;

pub use cell::Cell;
pub use grid::{Grid, GridError, GridIter};
pub use point::Point;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Cell, Point};

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn cell_round_trip() {
        let c = Cell::floor().with_weight(4.5);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
