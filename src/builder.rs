//! Construction of [`Grid`]s from authoring data.
//!
//! A [`GridBuilder`] accumulates tiles and the start configuration, collecting any
//! [`BuilderInvalidReason`]s along the way, and surfaces them all at [`build`](GridBuilder::build)
//! time. Cells never assigned a tile stay empty (no segments), so a built grid is always fully
//! populated and rectangular, which the search engine relies on.

use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use unordered_pair::UnorderedPair;

use crate::geometry::{Port, Rotation};
use crate::grid::Grid;
use crate::location::{Dimension, Location};
use crate::tile::Tile;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile or the start configuration was placed outside the bounds specified by `dims` on
    /// the builder.
    FeatureOutOfBounds,
    /// A segment endpoint or the start entry port was not a valid port index in `0..8`.
    PortOutOfRange,
    /// [`build`](GridBuilder::build) was called with no start tile and entry port configured.
    MissingStart,
}

/// A builder for [`Grid`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some
/// point.
#[derive(Clone)]
pub struct GridBuilder {
    // width, height
    dims: (Dimension, Dimension),
    tiles: Array2<Tile>,
    start: Option<(Location, Port)>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl GridBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    ///
    /// Every cell starts out as a tile with no segments, i.e. a dead end.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            tiles: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Tile::default),
            start: None,
            invalid_reasons: Default::default(),
        }
    }

    /// Place a tile at `location` with the given path segments (pairs of port indices, declared
    /// order preserved) and initial committed `rotation`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// or [`PortOutOfRange`](BuilderInvalidReason::PortOutOfRange) invalid state if `location` is
    /// out of bounds or any segment endpoint is not in `0..8`.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_tile(&mut self, location: Location, segments: &[(u8, u8)], rotation: Rotation) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.in_bounds(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        let Some(parsed) = segments.iter()
            .map(|&(p, q)| Port::new(p).zip(Port::new(q)))
            .collect::<Option<Vec<_>>>()
        else {
            self.invalid_reasons.push(BuilderInvalidReason::PortOutOfRange);
            return self;
        };

        let segments = parsed.into_iter().map(UnorderedPair::from).collect_vec();
        self.tiles.index_mut(location.as_index()).assign_elem(Tile::new(segments, rotation));

        self
    }

    /// Declare the start tile and the port index of the entry point through which the path
    /// enters it.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// or [`PortOutOfRange`](BuilderInvalidReason::PortOutOfRange) invalid state if `location` is
    /// out of bounds or `entry` is not in `0..8`.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn start_at(&mut self, location: Location, entry: u8) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.in_bounds(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        match Port::new(entry) {
            Some(port) => self.start = Some((location, port)),
            None => self.invalid_reasons.push(BuilderInvalidReason::PortOutOfRange),
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has
    /// arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// A missing start configuration is only reported by [`build`](Self::build).
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will
    /// indicate why.
    pub fn build(&self) -> Result<Grid, Vec<BuilderInvalidReason>> {
        let mut invalid_reasons = self.invalid_reasons.clone();
        if self.start.is_none() {
            invalid_reasons.push(BuilderInvalidReason::MissingStart);
        }

        match self.start {
            Some(start) if invalid_reasons.is_empty() => Ok(Grid {
                tiles: self.tiles.clone(),
                dims: self.dims,
                start,
            }),
            _ => Err(invalid_reasons),
        }
    }
}
