#![warn(missing_docs)]

//! # `culvert`
//!
//! A solvability checker and solver for grid-based pipe rotation puzzles: every cell of a
//! rectangular grid holds a tile carrying fixed internal path segments between points on its
//! border, each tile may be rotated in 90° steps, and the puzzle is solved when some choice of
//! rotations produces a continuous path from a designated start tile and entry point out through
//! the top edge of the grid.
//!
//! Begin by building a [`Grid`] with a [`GridBuilder`](builder::GridBuilder), placing tiles by
//! [`Location`] and declaring the start tile and entry [`Port`].
//! Call [`Grid::is_solvable`] to test whether any rotation assignment opens a path, or
//! [`Grid::reveal_solution`] to additionally commit the winning rotations to the tiles.
//!
//! # Internals
//! This crate is driven by a depth-first backtracking search over (tile, entry port) states.
//! Each tile border exposes eight ports, two per side; a path segment joins two ports, and
//! rotating a tile by one step maps every port `p` to `(p + 2) mod 8`.
//! The search explores all four rotations of each tile it enters, following segments into
//! neighboring tiles via a fixed complementary-port correspondence, and succeeds the moment a
//! segment exits through a top-side port on the grid's top row.
//!
//! Two rules keep the search sound and finite:
//! 1. A visited set of (tile, entry port) pairs mirrors the in-progress path exactly: entries are
//!    added before recursing and removed only when every continuation from that state has failed.
//!    Re-entering a tile through an already-visited port fails immediately, so loops in the grid
//!    topology cannot recurse forever.
//! 2. A tile entered through two different ports is locked: its rotation was fixed by its first
//!    use, and perturbing it would invalidate the already-accepted portion of the path.
//!
//! Rotation exploration works on a scratch copy of the committed rotations owned by the search,
//! so checking solvability never disturbs the grid and independent searches over the same grid
//! cannot interfere.

pub use geometry::{Port, Rotation, Side};
pub use grid::{Grid, Solution};
pub use location::Location;
pub use tile::Tile;

pub(crate) mod grid;
mod tests;
pub(crate) mod geometry;
pub(crate) mod location;
pub(crate) mod tile;
pub mod builder;
pub(crate) mod solver;
