use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::geometry::{Port, Rotation};

/// A single grid cell: a fixed list of internal path segments plus a committed rotation.
///
/// The segment list is set at construction and never changes; rotation only affects where the
/// segment endpoints land on the border. The committed rotation is the tile's real, visible
/// orientation; the solvability search never touches it, only
/// [`Grid::reveal_solution`](crate::Grid::reveal_solution) does.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tile {
    segments: Vec<UnorderedPair<Port>>,
    rotation: Rotation,
}

impl Tile {
    pub(crate) fn new(segments: Vec<UnorderedPair<Port>>, rotation: Rotation) -> Self {
        Self { segments, rotation }
    }

    /// This tile's committed rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The fixed path segments as authored, i.e. under the unrotated orientation.
    pub fn segments(&self) -> &[UnorderedPair<Port>] {
        &self.segments
    }

    /// The path segments with every endpoint transformed by `rotation`, in declared order.
    pub fn segments_at(&self, rotation: Rotation) -> Vec<UnorderedPair<Port>> {
        self.segments.iter()
            .map(|segment| UnorderedPair(segment.0.rotated(rotation), segment.1.rotated(rotation)))
            .collect_vec()
    }

    /// Advance the committed rotation by one clockwise quarter turn.
    ///
    /// This is the operation a presentation layer triggers when the user clicks a tile.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.advanced();
    }

    /// Step the committed rotation forward until it matches `target`.
    ///
    /// Applies `(target - committed) mod 4` single steps, so a tile already at `target` is left
    /// untouched.
    pub(crate) fn align_to(&mut self, target: Rotation) {
        for _ in 0..target.steps_from(self.rotation) {
            self.rotate();
        }
    }
}
