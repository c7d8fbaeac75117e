//! Legend glyphs.

use bf_core::RoundLimits;
use bf_terrain::Terrain;

pub const START:    char = 'S';
pub const TARGET:   char = 'T';
pub const WAIT:     char = 'w';
pub const GROUND:   char = Terrain::Ground.glyph();
pub const ELEVATED: char = Terrain::Elevated.glyph();

/// Glyph for the `step`-th entry of a route: digits cycle `0`–`9`.
#[inline]
pub fn step_digit(step: usize) -> char {
    char::from(b'0' + (step % 10) as u8)
}

/// How to play and how to read the output, with the accepted ranges.
pub fn help_text(limits: &RoundLimits) -> String {
    let lines = [
        "Welcome to the battlefield path finder!".to_string(),
        "Round parameters:".to_string(),
        format!(
            "  1. map size between {0} x {0} and {1} x {1}",
            limits.min_size, limits.max_size
        ),
        format!(
            "  2. number of units between {} and {}",
            limits.min_units, limits.max_units
        ),
        format!(
            "  3. percentage of elevated terrain between {} and {}",
            limits.min_elevation_percent, limits.max_elevation_percent
        ),
        "Each unit's route is drawn on its own map:".to_string(),
        format!("  {START}   - start position"),
        format!("  {TARGET}   - target position"),
        "  0-9 - step number along the route (cycles every 10 steps)".to_string(),
        format!("  {WAIT}   - unit waits in place for another unit to move on"),
        format!("  {ELEVATED}   - elevated terrain"),
        format!("  {GROUND}   - ground terrain"),
    ];
    let mut s = lines.join("\n");
    s.push('\n');
    s
}
