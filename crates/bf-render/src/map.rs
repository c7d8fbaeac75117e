//! Map rendering.
//!
//! Every map row is one line with cells separated by a single space.

use bf_core::{Coord, UnitId};
use bf_route::Route;
use bf_terrain::{Endpoints, TerrainGrid};

use crate::legend::{START, TARGET, WAIT, step_digit};

/// The bare terrain map.
pub fn render_terrain(grid: &TerrainGrid) -> String {
    to_text(&terrain_canvas(grid), grid.cols())
}

/// One unit's route drawn over the terrain.
///
/// Each route entry is drawn as its step digit, or `w` when it repeats the
/// previous entry; later steps overwrite earlier ones on the same cell.
/// `S` and `T` are drawn last.
pub fn render_unit(grid: &TerrainGrid, route: &Route, start: Coord, target: Coord) -> String {
    let mut canvas = terrain_canvas(grid);
    let mut put = |c: Coord, glyph: char| {
        if let Some(i) = grid.index_of(c) {
            canvas[i] = glyph;
        }
    };

    for (step, &cell) in route.steps.iter().enumerate() {
        let glyph = if route.is_wait(step) { WAIT } else { step_digit(step) };
        put(cell, glyph);
    }
    put(start, START);
    put(target, TARGET);

    to_text(&canvas, grid.cols())
}

/// Headline for one unit: endpoints plus step count, or a not-found note.
pub fn unit_summary(unit: UnitId, route: &Route, start: Coord, target: Coord) -> String {
    let head = format!("Unit {} Path: Start {start}; Target {target};", unit.0);
    if route.is_found() {
        format!(
            "{head} Number of Steps (including waiting steps): {}",
            route.step_count()
        )
    } else {
        format!("{head} Path Not Found!")
    }
}

/// Summary and overlay for every unit, separated by blank lines.
pub fn render_round(grid: &TerrainGrid, endpoints: &Endpoints, routes: &[Route]) -> String {
    endpoints
        .iter()
        .zip(routes)
        .map(|((unit, start, target), route)| {
            format!(
                "{}\n{}",
                unit_summary(unit, route, start, target),
                render_unit(grid, route, start, target)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn terrain_canvas(grid: &TerrainGrid) -> Vec<char> {
    grid.iter_rows().flatten().map(|t| t.glyph()).collect()
}

fn to_text(canvas: &[char], cols: usize) -> String {
    let mut out = String::with_capacity(canvas.len() * 2);
    for row in canvas.chunks(cols.max(1)) {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
