use std::collections::HashSet;

use log::{debug, trace};
use ndarray::Array2;

use crate::geometry::{Port, Rotation, Side, TURN_COUNT};
use crate::grid::{Grid, Solution};
use crate::location::Location;

/// The depth-first backtracking search behind [`Grid::is_solvable`] and
/// [`Grid::reveal_solution`].
///
/// The search owns two pieces of working memory, both discarded with it:
/// - `orientations`: a scratch copy of every tile's committed rotation, advanced freely during
///   exploration so the grid itself is never mutated;
/// - `visited`: exactly the (tile, entry port) pairs of the in-progress path. Entries are added
///   before recursing and removed only when every continuation from that state has failed, so
///   membership doubles as both the cycle check and the multiple-use lock.
pub(crate) struct PathSearch<'a> {
    grid: &'a Grid,
    orientations: Array2<Rotation>,
    visited: HashSet<(Location, Port)>,
}

impl<'a> From<&'a Grid> for PathSearch<'a> {
    fn from(grid: &'a Grid) -> Self {
        Self {
            grid,
            orientations: grid.tiles.map(|tile| tile.rotation()),
            visited: HashSet::new(),
        }
    }
}

impl PathSearch<'_> {
    /// Run the search from the grid's start tile and entry port.
    ///
    /// On success the visited set holds the complete winning path, and the returned [`Solution`]
    /// maps each location on it to its winning orientation.
    pub(crate) fn solve(mut self) -> Option<Solution> {
        let (start, entry) = self.grid.start;
        debug!("searching from {:?}, entry port {}", start, entry);

        self.search(start, entry).then(|| {
            self.visited.iter()
                .map(|&(location, _)| (location, self.orientations[location.as_index()]))
                .collect()
        })
    }

    /// Whether a path entering the tile at `location` through `entry` can reach the top edge.
    fn search(&mut self, location: Location, entry: Port) -> bool {
        if !self.visited.insert((location, entry)) {
            trace!("already entered {:?} through port {}, cutting cycle", location, entry);
            return false;
        }

        let grid = self.grid;
        let tile = &grid.tiles[location.as_index()];
        for _ in 0..TURN_COUNT {
            let orientation = self.orientations[location.as_index()];
            for segment in tile.segments_at(orientation) {
                let exit = if segment.0 == entry {
                    segment.1
                } else if segment.1 == entry {
                    segment.0
                } else {
                    continue;
                };
                trace!("{:?}: segment from port {} to port {}", location, entry, exit);

                match grid.neighbor_of(location, exit.side()) {
                    // a top-side port with nothing above is the win condition
                    None if exit.side() == Side::Top => {
                        debug!("path exits the grid from {:?} through port {}", location, exit);
                        return true;
                    }
                    Some(next) => {
                        if self.search(next, exit.complement()) {
                            return true;
                        }
                    }
                    // any other boundary is a dead end, not an error
                    None => {}
                }
            }

            if self.entries_at(location) > 1 {
                // another entry already committed this tile's orientation to the current path;
                // rotating it now would sever that accepted stretch
                trace!("{:?} locked by an earlier entry, skipping remaining rotations", location);
                break;
            }
            self.orientations[location.as_index()] = orientation.advanced();
        }
        // when all four rotations run out, the fourth advance above has already restored the
        // scratch orientation to its baseline for any later re-entry

        self.visited.remove(&(location, entry));
        trace!("no continuation from {:?} port {}, backtracking", location, entry);
        false
    }

    /// How many ports of the tile at `location` the in-progress path has entered through.
    ///
    /// The visited set only ever holds entries of the active path, so scanning all of it is
    /// equivalent to scanning the recursion ancestry.
    fn entries_at(&self, location: Location) -> usize {
        self.visited.iter().filter(|&&(visited, _)| visited == location).count()
    }
}
