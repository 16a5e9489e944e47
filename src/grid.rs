use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::geometry::{Port, Rotation, Side};
use crate::location::{Dimension, Location};
use crate::solver::PathSearch;
use crate::tile::Tile;

/// The winning rotation for every tile on a discovered path, keyed by location.
///
/// Tiles the path never crosses do not appear; their committed rotation is already correct by
/// virtue of not mattering.
pub type Solution = HashMap<Location, Rotation>;

/// A rectangular arrangement of [`Tile`]s with a designated start tile and entry port.
///
/// [`Grid`]s should be built using a [`GridBuilder`](crate::builder::GridBuilder), which
/// guarantees a fully populated board and an in-range start configuration.
#[derive(Debug)]
pub struct Grid {
    pub(crate) tiles: Array2<Tile>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) start: (Location, Port),
}

impl Grid {
    /// Whether some assignment of tile rotations yields a continuous path from the start tile
    /// and entry port out through the top edge of the grid.
    ///
    /// Never changes any tile's committed rotation; for a fixed grid state the result is
    /// deterministic. Deferring to a [`PathSearch`], this explores at most all four rotations of
    /// every tile reachable from the start.
    pub fn is_solvable(&self) -> bool {
        PathSearch::from(self).solve().is_some()
    }

    /// Like [`is_solvable`](Self::is_solvable), but on success also commits the discovered
    /// rotations: every tile on the winning path is stepped forward to its winning orientation.
    ///
    /// Returns the committed [`Solution`] so a presentation layer can highlight the path, or
    /// [`None`], leaving every tile untouched, if the grid is unsolvable. Calling this twice in
    /// succession commits the same rotations as calling it once.
    pub fn reveal_solution(&mut self) -> Option<Solution> {
        let solution = PathSearch::from(&*self).solve()?;
        for (&location, &rotation) in &solution {
            self.tiles[location.as_index()].align_to(rotation);
        }
        Some(solution)
    }

    /// Advance the committed rotation of the tile at `location` by one clockwise quarter turn.
    ///
    /// This is the hook for user interaction; out-of-bounds locations are ignored. Committed
    /// rotations are independent of any in-flight solvability check.
    pub fn rotate_tile(&mut self, location: Location) {
        if let Some(tile) = self.tiles.get_mut(location.as_index()) {
            tile.rotate();
        }
    }

    /// The tile at `location`, or [`None`] if out of bounds.
    pub fn tile(&self, location: Location) -> Option<&Tile> {
        self.tiles.get(location.as_index())
    }

    /// The grid dimensions, in `(x, y)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The start tile location and the port through which the path enters it.
    pub fn start(&self) -> (Location, Port) {
        self.start
    }

    /// The location adjacent to `location` across `side`, or [`None`] at the grid boundary.
    pub(crate) fn neighbor_of(&self, location: Location, side: Side) -> Option<Location> {
        let next = side.attempt_from(location);
        next.in_bounds(self.dims).then_some(next)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.tiles.nrows() * (self.tiles.ncols() + 1));

        for row in self.tiles.rows() {
            for tile in row {
                out.push(glyph(tile));
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}

/// Pick a box-drawing character from the sides a tile's segments touch under its committed
/// rotation.
fn glyph(tile: &Tile) -> char {
    // indexed as [top, right, bottom, left], matching port grouping
    let mut touched = [false; 4];
    for segment in tile.segments_at(tile.rotation()) {
        for port in [segment.0, segment.1] {
            touched[(port.index() / 2) as usize] = true;
        }
    }

    match touched {
        [false, false, false, false] => '.',
        [true, false, false, false] => '╵',
        [false, true, false, false] => '╶',
        [false, false, true, false] => '╷',
        [false, false, false, true] => '╴',
        [true, true, false, false] => '└',
        [true, false, true, false] => '│',
        [true, false, false, true] => '┘',
        [false, true, true, false] => '┌',
        [false, true, false, true] => '─',
        [false, false, true, true] => '┐',
        [true, true, true, false] => '├',
        [true, true, false, true] => '┴',
        [true, false, true, true] => '┤',
        [false, true, true, true] => '┬',
        [true, true, true, true] => '┼',
    }
}
