use std::num::NonZero;

type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`;
/// `y == 0` is the top row, through which a winning path must exit.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
    pub(crate) fn in_bounds(&self, dims: (Dimension, Dimension)) -> bool {
        // wrapping offsets send negative coordinates far out of range, so upper checks suffice
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }
}
