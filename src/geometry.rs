use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::location::Location;

pub(crate) const PORT_COUNT: u8 = 8;
pub(crate) const TURN_COUNT: u8 = 4;

/// A tile orientation measured in clockwise quarter turns, always reduced into `0..4`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rotation(u8);

impl Rotation {
    /// The unrotated orientation.
    pub const ZERO: Self = Self(0);

    /// Construct an orientation from a number of clockwise quarter turns, reduced mod 4.
    pub fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % TURN_COUNT)
    }

    /// The orientation one clockwise quarter turn ahead of this one.
    pub fn advanced(self) -> Self {
        Self((self.0 + 1) % TURN_COUNT)
    }

    /// The number of clockwise quarter turns from the unrotated orientation, in `0..4`.
    pub fn quarter_turns(self) -> u8 {
        self.0
    }

    /// The number of single forward steps needed to reach `self` starting from `from`.
    pub(crate) fn steps_from(self, from: Self) -> u8 {
        (self.0 + TURN_COUNT - from.0) % TURN_COUNT
    }
}

/// One of the four sides of a tile, each carrying two ports.
///
/// Declaration order matches the port numbering: side `n` owns ports `2n` and `2n + 1`.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Side {
    /// Ports 0 and 1. Exiting through this side on the top row wins.
    Top,
    /// Ports 2 and 3.
    Right,
    /// Ports 4 and 5.
    Bottom,
    /// Ports 6 and 7.
    Left,
}

impl Side {
    /// Step from `location` to the location adjacent across this side.
    ///
    /// The result may be out of bounds; callers are expected to check against the grid
    /// dimensions.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Top => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Bottom => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
        }
    }
}

/// One of the eight fixed connection points around a tile border, two per [`Side`].
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Port(u8);

impl Port {
    /// Construct a port from its index, or [`None`] if `index` is not in `0..8`.
    pub fn new(index: u8) -> Option<Self> {
        (index < PORT_COUNT).then_some(Self(index))
    }

    /// This port's index in `0..8`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// The side this port sits on.
    pub fn side(self) -> Side {
        Side::VARIANTS[(self.0 / 2) as usize]
    }

    /// Where this port lands after rotating its tile by `rotation`.
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self((self.0 + 2 * rotation.quarter_turns()) % PORT_COUNT)
    }

    /// The port this one touches on the adjacent tile across its side.
    ///
    /// Vertically matched port indices sum to 5, horizontally matched ones to 9; this pairing
    /// is fixed by the grid geometry and holds for every tile.
    pub fn complement(self) -> Self {
        match self.side() {
            Side::Top | Side::Bottom => Self(5 - self.0),
            Side::Right | Side::Left => Self(9 - self.0),
        }
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
