//! Unit tests for bf-render.

#[cfg(test)]
mod helpers {
    use bf_core::{Coord, UnitId};
    use bf_route::Route;

    pub fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    pub fn route(unit: u32, cells: &[(i32, i32)]) -> Route {
        Route::new(UnitId(unit), cells.iter().map(|&p| Coord::from(p)).collect())
    }
}

#[cfg(test)]
mod map {
    use bf_core::UnitId;
    use bf_route::Route;
    use bf_terrain::{Endpoints, TerrainGrid};
    use super::helpers::{c, route};
    use crate::{render_round, render_terrain, render_unit, unit_summary};

    #[test]
    fn terrain_rows_are_space_separated() {
        let grid = TerrainGrid::from_ascii(".^.\n^..").unwrap();
        assert_eq!(render_terrain(&grid), ". ^ .\n^ . .\n");
    }

    #[test]
    fn wait_steps_are_marked() {
        let grid = TerrainGrid::from_ascii("....").unwrap();
        let r = route(1, &[(0, 3), (0, 3), (0, 2), (0, 1)]);
        assert_eq!(render_unit(&grid, &r, c(0, 3), c(0, 1)), ". T 2 S\n");
    }

    #[test]
    fn wait_glyph_survives_when_not_overwritten() {
        let grid = TerrainGrid::from_ascii("....").unwrap();
        let r = route(0, &[(0, 0), (0, 1), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(render_unit(&grid, &r, c(0, 0), c(0, 3)), "S w 3 T\n");
    }

    #[test]
    fn step_digits_cycle_every_ten() {
        let grid = TerrainGrid::from_ascii("............").unwrap();
        let cells: Vec<(i32, i32)> = (0..12).map(|col| (0, col)).collect();
        let r = route(0, &cells);
        assert_eq!(
            render_unit(&grid, &r, c(0, 0), c(0, 11)),
            "S 1 2 3 4 5 6 7 8 9 0 T\n"
        );
    }

    #[test]
    fn unfound_route_shows_only_endpoints() {
        let grid = TerrainGrid::from_ascii(".^.\n...").unwrap();
        let r = Route::not_found(UnitId(0));
        assert_eq!(render_unit(&grid, &r, c(0, 0), c(0, 2)), "S ^ T\n. . .\n");
    }

    #[test]
    fn summaries() {
        let found = route(1, &[(0, 2), (0, 2), (0, 1), (0, 0)]);
        assert_eq!(
            unit_summary(UnitId(1), &found, c(0, 2), c(0, 0)),
            "Unit 1 Path: Start (0,2); Target (0,0); Number of Steps (including waiting steps): 3"
        );
        assert_eq!(
            unit_summary(UnitId(0), &Route::not_found(UnitId(0)), c(0, 0), c(0, 2)),
            "Unit 0 Path: Start (0,0); Target (0,2); Path Not Found!"
        );
    }

    #[test]
    fn round_lists_every_unit() {
        let grid = TerrainGrid::from_ascii("...").unwrap();
        let ends = Endpoints::from_pairs([(c(0, 0), c(0, 2)), (c(0, 2), c(0, 0))]);
        let routes = vec![
            route(0, &[(0, 0), (0, 1), (0, 2)]),
            route(1, &[(0, 2), (0, 2), (0, 1), (0, 0)]),
        ];
        let text = render_round(&grid, &ends, &routes);
        assert!(text.starts_with("Unit 0 Path:"));
        assert!(text.contains("\n\nUnit 1 Path:"));
        assert!(text.ends_with("T 2 S\n"));
    }
}

#[cfg(test)]
mod legend {
    use bf_core::RoundLimits;
    use crate::help_text;
    use crate::legend::step_digit;

    #[test]
    fn help_mentions_limits_and_glyphs() {
        let text = help_text(&RoundLimits::default());
        assert!(text.contains("between 7 x 7 and 64 x 64"));
        assert!(text.contains("between 1 and 4"));
        assert!(text.contains("between 0 and 80"));
        for glyph in ["S ", "T ", "w ", "^ ", ". "] {
            assert!(text.contains(glyph), "missing {glyph:?}");
        }
    }

    #[test]
    fn help_is_one_line_per_entry() {
        let text = help_text(&RoundLimits::default());
        assert_eq!(text.lines().count(), 12);
        assert!(text.starts_with("Welcome to the battlefield path finder!\n"));
        assert!(text.ends_with("  .   - ground terrain\n"));
        assert!(text.contains("\n  2. number of units between 1 and 4\n"));
    }

    #[test]
    fn digits() {
        assert_eq!(step_digit(0), '0');
        assert_eq!(step_digit(9), '9');
        assert_eq!(step_digit(23), '3');
    }
}
