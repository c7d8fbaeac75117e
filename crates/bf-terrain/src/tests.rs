//! Unit tests for bf-terrain.
//!
//! Fixtures are written with the legend glyphs (`.` ground, `^` elevated).

#[cfg(test)]
mod grid {
    use bf_core::{Coord, RoundRng};
    use crate::{Terrain, TerrainError, TerrainGrid};

    #[test]
    fn generated_grid_is_rectangular() {
        let mut rng = RoundRng::new(42);
        let grid = TerrainGrid::generate(9, 13, 35, &mut rng);
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 13);
        assert_eq!(grid.cell_count(), 9 * 13);
        assert!(grid.iter_rows().all(|r| r.len() == 13));
        assert_eq!(grid.iter_rows().count(), 9);
    }

    #[test]
    fn zero_percent_is_all_ground() {
        let mut rng = RoundRng::new(1);
        let grid = TerrainGrid::generate(16, 16, 0, &mut rng);
        assert_eq!(grid.ground_count(), 256);
    }

    #[test]
    fn hundred_percent_is_all_elevated() {
        let mut rng = RoundRng::new(1);
        let grid = TerrainGrid::generate(16, 16, 100, &mut rng);
        assert_eq!(grid.ground_count(), 0);
    }

    #[test]
    fn elevation_rate_roughly_matches_percent() {
        let mut rng = RoundRng::new(2024);
        let grid = TerrainGrid::generate(64, 64, 40, &mut rng);
        let elevated = grid.cell_count() - grid.ground_count();
        // 4096 cells, expected 1638.
        assert!((1_450..1_830).contains(&elevated), "got {elevated}");
    }

    #[test]
    fn same_seed_same_grid() {
        let a = TerrainGrid::generate(20, 20, 30, &mut RoundRng::new(5));
        let b = TerrainGrid::generate(20, 20, 30, &mut RoundRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn bounds_checks() {
        let grid = TerrainGrid::filled(2, 3, Terrain::Ground);
        assert!(grid.contains(Coord::new(1, 2)));
        assert!(!grid.contains(Coord::new(2, 0)));
        assert!(!grid.contains(Coord::new(0, 3)));
        assert!(!grid.contains(Coord::new(-1, 0)));
        assert_eq!(grid.get(Coord::new(0, -1)), None);
        assert!(!grid.is_ground(Coord::new(5, 5)));
    }

    #[test]
    fn ascii_roundtrip_with_spaces() {
        let grid = TerrainGrid::from_ascii(". ^ .\n^ . .\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Terrain::Elevated));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(Terrain::Ground));
        assert_eq!(grid.to_string(), ".^.\n^..\n");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = TerrainGrid::from_ascii("...\n..\n").unwrap_err();
        assert!(matches!(err, TerrainError::Malformed(_)));
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        assert!(TerrainGrid::from_ascii("..x").is_err());
    }

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut grid = TerrainGrid::filled(1, 2, Terrain::Ground);
        grid.set(Coord::new(0, 1), Terrain::Elevated);
        grid.set(Coord::new(3, 3), Terrain::Elevated);
        assert_eq!(grid.ground_count(), 1);
    }
}

#[cfg(test)]
mod sampler {
    use bf_core::{Coord, RoundRng, UnitId};
    use crate::{Endpoints, Terrain, TerrainError, TerrainGrid, place_units, required_ground_cells};

    fn assert_valid(grid: &TerrainGrid, e: &Endpoints) {
        for (unit, s, t) in e.iter() {
            assert!(grid.is_ground(s), "{unit} start {s} not ground");
            assert!(grid.is_ground(t), "{unit} target {t} not ground");
            assert_ne!(s, t, "{unit} start equals target");
        }
        for (i, a) in e.starts.iter().enumerate() {
            for b in &e.starts[i + 1..] {
                assert_ne!(a, b, "duplicate start");
            }
        }
    }

    #[test]
    fn endpoints_satisfy_constraints_across_seeds() {
        for seed in 0..50 {
            let mut rng = RoundRng::new(seed);
            let grid = TerrainGrid::generate(8, 8, 50, &mut rng);
            if grid.ground_count() < required_ground_cells(4) {
                continue;
            }
            let e = place_units(&grid, 4, 10_000, &mut rng).unwrap();
            assert_eq!(e.len(), 4);
            assert_valid(&grid, &e);
        }
    }

    #[test]
    fn tight_fit_still_places_distinct_starts() {
        // Exactly 3 ground cells for 3 units.
        let grid = TerrainGrid::from_ascii("^.^\n.^.\n").unwrap();
        let e = place_units(&grid, 3, 100_000, &mut RoundRng::new(3)).unwrap();
        assert_valid(&grid, &e);
    }

    #[test]
    fn all_elevated_grid_is_rejected_upfront() {
        let grid = TerrainGrid::filled(8, 8, Terrain::Elevated);
        let err = place_units(&grid, 1, 10_000, &mut RoundRng::new(0)).unwrap_err();
        assert!(matches!(err, TerrainError::Infeasible { ground_cells: 0, required: 2 }));
    }

    #[test]
    fn single_ground_cell_cannot_host_distinct_target() {
        let mut grid = TerrainGrid::filled(8, 8, Terrain::Elevated);
        grid.set(Coord::new(4, 4), Terrain::Ground);
        let err = place_units(&grid, 1, 10_000, &mut RoundRng::new(0)).unwrap_err();
        assert!(matches!(err, TerrainError::Infeasible { ground_cells: 1, .. }));
    }

    #[test]
    fn more_units_than_ground_cells_is_infeasible() {
        let grid = TerrainGrid::from_ascii("..^^\n^^^^\n").unwrap();
        let err = place_units(&grid, 3, 10_000, &mut RoundRng::new(0)).unwrap_err();
        assert!(matches!(err, TerrainError::Infeasible { ground_cells: 2, required: 3 }));
    }

    #[test]
    fn retry_loop_is_bounded() {
        let mut grid = TerrainGrid::filled(64, 64, Terrain::Elevated);
        grid.set(Coord::new(0, 0), Terrain::Ground);
        grid.set(Coord::new(63, 63), Terrain::Ground);
        let err = place_units(&grid, 1, 1, &mut RoundRng::new(11)).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::SamplingExhausted { unit: UnitId(0), attempts: 1 }
        ));
    }

    #[test]
    fn zero_units_is_an_error() {
        let grid = TerrainGrid::filled(4, 4, Terrain::Ground);
        assert!(matches!(
            place_units(&grid, 0, 10, &mut RoundRng::new(0)),
            Err(TerrainError::ZeroUnits)
        ));
    }

    #[test]
    fn sampling_is_deterministic() {
        let grid = TerrainGrid::filled(10, 10, Terrain::Ground);
        let a = place_units(&grid, 4, 100, &mut RoundRng::new(9)).unwrap();
        let b = place_units(&grid, 4, 100, &mut RoundRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_pairs_preserves_unit_order() {
        let e = Endpoints::from_pairs([
            (Coord::new(0, 0), Coord::new(0, 2)),
            (Coord::new(0, 2), Coord::new(0, 0)),
        ]);
        assert_eq!(e.of(UnitId(1)), (Coord::new(0, 2), Coord::new(0, 0)));
    }
}
