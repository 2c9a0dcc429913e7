//! The [`Grid`] type — a dense, immutable 2D grid of [`Cell`]s.
//!
//! A `Grid` is built once from an external cell source and never mutated
//! afterwards. Searches borrow it read-only, so a grid may be shared freely
//! across concurrent, independent searches.

use std::fmt;

use crate::cell::Cell;
use crate::point::Point;

/// Errors raised while constructing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested dimensions do not describe at least one cell.
    InvalidGrid { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A dense 2D grid of [`Cell`]s with fixed positive dimensions.
///
/// Coordinates run over `[0, width) × [0, height)`; everything outside that
/// range is invalid. Cells are stored row-major for O(1) lookup.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid by calling `f` once for every coordinate, row-major.
    ///
    /// Fails with [`GridError::InvalidGrid`] when either dimension is not
    /// positive.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> Cell,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidGrid { width, height });
        }
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Point::new(x, y)));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid with every cell set to `cell`.
    pub fn filled(width: i32, height: i32, cell: Cell) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| cell)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` is inside the grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds. Out-of-bounds lookup is a contract
    /// violation, not a recoverable failure; callers check [`contains`]
    /// first.
    ///
    /// [`contains`]: Grid::contains
    #[inline]
    pub fn cell_at(&self, p: Point) -> Cell {
        assert!(self.contains(p), "coordinate {p} out of grid bounds");
        self.cells[(p.y as usize) * (self.width as usize) + (p.x as usize)]
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            cur: Point::ZERO,
        }
    }
}

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    cur: Point,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.y >= self.grid.height {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.grid.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some((p, self.grid.cell_at(p)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.y >= self.grid.height {
            return (0, Some(0));
        }
        let w = self.grid.width as usize;
        let remaining_in_row = (self.grid.width - self.cur.x) as usize;
        let remaining_rows = (self.grid.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for GridIter<'_> {}
