//! **pathgrid-search** — A* shortest-path search over weighted 2D grids.
//!
//! The crate exposes a single operation, [`find_path`], which runs a
//! best-first search over the 4-connected graph implied by a
//! [`Grid`](pathgrid_core::Grid): edge cost is the entered cell's weight,
//! and the [`manhattan`] distance to the goal serves as the heuristic.
//!
//! Each invocation owns its bookkeeping exclusively, so a grid may be
//! shared read-only across concurrent searches. The search is synchronous
//! and CPU-bound; it performs no I/O and runs to completion or failure.
//! Failures are reported as distinct [`PathError`] variants so callers can
//! tell bad input apart from "no route exists".

mod astar;
mod distance;
mod error;

pub use astar::find_path;
pub use distance::manhattan;
pub use error::PathError;
