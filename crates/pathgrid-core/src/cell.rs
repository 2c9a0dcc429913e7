//! The [`Cell`] type — walkability and traversal cost of one grid position.

/// A single grid cell.
///
/// `weight` is the cost of *entering* this cell and must be non-negative.
/// It is only meaningful when `walkable` is true; callers must not rely on
/// the weight of a blocked cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walkable: bool,
    pub weight: f32,
}

impl Cell {
    /// A walkable cell with unit weight.
    #[inline]
    pub const fn floor() -> Self {
        Self {
            walkable: true,
            weight: 1.0,
        }
    }

    /// A blocked cell.
    #[inline]
    pub const fn wall() -> Self {
        Self {
            walkable: false,
            weight: 1.0,
        }
    }

    /// Set the entry weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Cell {
    /// Walkable, unit weight.
    #[inline]
    fn default() -> Self {
        Self::floor()
    }
}
