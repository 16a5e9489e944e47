#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::builder::{BuilderInvalidReason, GridBuilder};
    use crate::{Grid, Location, Port, Rotation, Side};

    fn dims(x: usize, y: usize) -> (NonZero<usize>, NonZero<usize>) {
        (NonZero::new(x).unwrap(), NonZero::new(y).unwrap())
    }

    /// One column, two rows: the bottom tile joins its bottom entry to its top side, the top
    /// tile joins its bottom side to its own top side. Solvable from the bottom edge.
    fn two_tile_chain(top_segments: &[(u8, u8)], rotation: Rotation) -> Grid {
        GridBuilder::with_dims(dims(1, 2))
            .add_tile(Location(0, 1), &[(4, 0)], rotation)
            .add_tile(Location(0, 0), top_segments, rotation)
            .start_at(Location(0, 1), 4)
            .build()
            .unwrap()
    }

    /// A 2x2 ring: the path from the bottom-left start crosses every tile, re-entering the
    /// bottom-left and top-left tiles through a second port before exiting at the top.
    fn ring_grid(top_left_segments: &[(u8, u8)]) -> Grid {
        GridBuilder::with_dims(dims(2, 2))
            .add_tile(Location(0, 1), &[(6, 2), (1, 0)], Rotation::ZERO)
            .add_tile(Location(1, 1), &[(7, 0)], Rotation::ZERO)
            .add_tile(Location(1, 0), &[(5, 6)], Rotation::ZERO)
            .add_tile(Location(0, 0), top_left_segments, Rotation::ZERO)
            .start_at(Location(0, 1), 6)
            .build()
            .unwrap()
    }

    #[test]
    fn rotation_steps_compose() {
        for index in 0..8 {
            let port = Port::new(index).unwrap();
            for turns in 0..4 {
                let mut stepped = port;
                for _ in 0..turns {
                    stepped = stepped.rotated(Rotation::new(1));
                }
                assert_eq!(port.rotated(Rotation::new(turns)), stepped);
            }
        }
    }

    #[test]
    fn port_sides_and_complements() {
        let sides = [
            Side::Top, Side::Top,
            Side::Right, Side::Right,
            Side::Bottom, Side::Bottom,
            Side::Left, Side::Left,
        ];
        for (index, side) in sides.into_iter().enumerate() {
            assert_eq!(Port::new(index as u8).unwrap().side(), side);
        }

        // vertically matched ports sum to 5, horizontally matched ports to 9
        for index in [0, 1, 4, 5] {
            let port = Port::new(index).unwrap();
            assert_eq!(port.index() + port.complement().index(), 5);
        }
        for index in [2, 3, 6, 7] {
            let port = Port::new(index).unwrap();
            assert_eq!(port.index() + port.complement().index(), 9);
        }

        assert!(Port::new(8).is_none());
    }

    #[test]
    fn solve_single_tile_from_any_starting_rotation() {
        for turns in 0..4 {
            let grid = GridBuilder::with_dims(dims(1, 1))
                .add_tile(Location(0, 0), &[(4, 0)], Rotation::new(turns))
                .start_at(Location(0, 0), 4)
                .build()
                .unwrap();

            assert!(grid.is_solvable(), "not solvable from starting rotation {}", turns);
        }
    }

    #[test]
    fn single_tile_dead_ends() {
        // no rotation of a top-side-to-top-side segment ever reaches the entry and the exit
        // boundary at once
        let grid = GridBuilder::with_dims(dims(1, 1))
            .add_tile(Location(0, 0), &[(0, 1)], Rotation::ZERO)
            .start_at(Location(0, 0), 4)
            .build()
            .unwrap();
        assert!(!grid.is_solvable());

        // segmentless tile
        let grid = GridBuilder::with_dims(dims(1, 1))
            .start_at(Location(0, 0), 4)
            .build()
            .unwrap();
        assert!(!grid.is_solvable());
    }

    #[test]
    fn two_tile_chain_solvable() {
        assert!(two_tile_chain(&[(5, 1)], Rotation::ZERO).is_solvable());
    }

    #[test]
    fn two_tile_chain_broken() {
        // without the connecting segment the top tile is a wall
        assert!(!two_tile_chain(&[], Rotation::ZERO).is_solvable());
        // a bottom-to-right segment never lines up with both the entry and the exit boundary
        assert!(!two_tile_chain(&[(5, 3)], Rotation::ZERO).is_solvable());
    }

    #[test]
    fn check_is_deterministic_and_does_not_rotate_tiles() {
        let grid = two_tile_chain(&[(5, 1)], Rotation::new(1));

        let first = grid.is_solvable();
        let second = grid.is_solvable();
        assert!(first);
        assert_eq!(first, second);

        for y in 0..2 {
            assert_eq!(grid.tile(Location(0, y)).unwrap().rotation(), Rotation::new(1));
        }
    }

    #[test]
    fn reveal_commits_rotations_and_is_idempotent() {
        let mut grid = GridBuilder::with_dims(dims(1, 1))
            .add_tile(Location(0, 0), &[(4, 0)], Rotation::new(1))
            .start_at(Location(0, 0), 4)
            .build()
            .unwrap();

        let solution = grid.reveal_solution().unwrap();
        // from one quarter turn, the first orientation joining the bottom entry to the top is
        // two quarter turns
        assert_eq!(solution.get(&Location(0, 0)), Some(&Rotation::new(2)));
        assert_eq!(grid.tile(Location(0, 0)).unwrap().rotation(), Rotation::new(2));

        let again = grid.reveal_solution().unwrap();
        assert_eq!(again, solution);
        assert_eq!(grid.tile(Location(0, 0)).unwrap().rotation(), Rotation::new(2));
    }

    #[test]
    fn reveal_leaves_unsolvable_grid_untouched() {
        let mut grid = GridBuilder::with_dims(dims(1, 1))
            .add_tile(Location(0, 0), &[(0, 1)], Rotation::new(3))
            .start_at(Location(0, 0), 4)
            .build()
            .unwrap();

        assert!(grid.reveal_solution().is_none());
        assert_eq!(grid.tile(Location(0, 0)).unwrap().rotation(), Rotation::new(3));
    }

    #[test]
    fn closed_loop_terminates() {
        // the two tiles hand the path back and forth; the visited set must cut the loop
        let grid = GridBuilder::with_dims(dims(1, 2))
            .add_tile(Location(0, 0), &[(5, 4)], Rotation::ZERO)
            .add_tile(Location(0, 1), &[(4, 0), (1, 0)], Rotation::ZERO)
            .start_at(Location(0, 1), 4)
            .build()
            .unwrap();

        assert!(!grid.is_solvable());
    }

    #[test]
    fn tile_reused_through_two_ports() {
        // the top-left tile is crossed once left-to-bottom and once bottom-to-top, both under
        // the same orientation
        let mut grid = ring_grid(&[(3, 4), (5, 0)]);

        let solution = grid.reveal_solution().unwrap();
        assert_eq!(solution.len(), 4);
        assert!(solution.values().all(|rotation| *rotation == Rotation::ZERO));
    }

    #[test]
    fn locked_tile_cannot_be_rerotated() {
        // the top-left tile serves the first crossing unrotated, but the second entry is only
        // ever served three quarter turns away; no single orientation satisfies both
        let grid = ring_grid(&[(3, 4), (2, 7)]);
        assert!(!grid.is_solvable());

        // each requirement is individually satisfiable: entered once at its second port, the
        // same tile rotates freely and exits the top
        let lone = GridBuilder::with_dims(dims(1, 1))
            .add_tile(Location(0, 0), &[(3, 4), (2, 7)], Rotation::ZERO)
            .start_at(Location(0, 0), 5)
            .build()
            .unwrap();
        assert!(lone.is_solvable());
    }

    #[test]
    fn builder_rejects_bad_configurations() {
        let mut builder = GridBuilder::with_dims(dims(2, 2));
        builder.add_tile(Location(2, 0), &[(4, 0)], Rotation::ZERO).start_at(Location(0, 0), 4);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::FeatureOutOfBounds]));
        // start_at no-ops once invalid, so build also reports the missing start
        assert_eq!(builder.build().unwrap_err(), vec![
            BuilderInvalidReason::FeatureOutOfBounds,
            BuilderInvalidReason::MissingStart,
        ]);

        let mut builder = GridBuilder::with_dims(dims(2, 2));
        builder.start_at(Location(0, 0), 4).add_tile(Location(0, 0), &[(4, 8)], Rotation::ZERO);
        assert_eq!(builder.build().unwrap_err(), vec![BuilderInvalidReason::PortOutOfRange]);

        let mut builder = GridBuilder::with_dims(dims(2, 2));
        builder.add_tile(Location(0, 0), &[(4, 0)], Rotation::ZERO);
        assert!(builder.is_valid().is_none());
        assert_eq!(builder.build().unwrap_err(), vec![BuilderInvalidReason::MissingStart]);

        let mut builder = GridBuilder::with_dims(dims(2, 2));
        builder.start_at(Location(0, 2), 4);
        assert_eq!(builder.build().unwrap_err(), vec![
            BuilderInvalidReason::FeatureOutOfBounds,
            BuilderInvalidReason::MissingStart,
        ]);

        let mut builder = GridBuilder::with_dims(dims(2, 2));
        builder.start_at(Location(0, 0), 9);
        assert_eq!(builder.build().unwrap_err(), vec![
            BuilderInvalidReason::PortOutOfRange,
            BuilderInvalidReason::MissingStart,
        ]);
    }

    #[test]
    fn rotate_tile_advances_committed_rotation() {
        let mut grid = two_tile_chain(&[(5, 1)], Rotation::ZERO);

        grid.rotate_tile(Location(0, 0));
        grid.rotate_tile(Location(0, 0));
        assert_eq!(grid.tile(Location(0, 0)).unwrap().rotation(), Rotation::new(2));
        assert_eq!(grid.tile(Location(0, 1)).unwrap().rotation(), Rotation::ZERO);

        // out-of-bounds clicks are ignored
        grid.rotate_tile(Location(5, 5));

        // two quarter turns leave a straight segment straight, so the grid stays solvable
        assert!(grid.is_solvable());
    }

    #[test]
    fn display_before_and_after_reveal() {
        let mut grid = two_tile_chain(&[(5, 1)], Rotation::new(1));

        assert_eq!(format!("{}", grid), "─
─
");

        assert!(grid.reveal_solution().is_some());
        assert_eq!(format!("{}", grid), "│
│
");
    }
}
