//! Rectangular terrain grid.
//!
//! # Storage
//!
//! Cells are stored row-major in one flat `Vec<Terrain>`, so the grid is
//! rectangular by construction.  The grid holds terrain only: per-unit
//! visited state lives in `bf-route`, which never writes here.

use std::fmt;

use bf_core::{Coord, RoundRng};

use crate::{TerrainError, TerrainResult};

// ── Terrain ───────────────────────────────────────────────────────────────────

/// Binary passability of one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Passable.
    #[default]
    Ground,
    /// Impassable.
    Elevated,
}

impl Terrain {
    /// Legend glyph: `.` for ground, `^` for elevated.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Ground   => '.',
            Terrain::Elevated => '^',
        }
    }

    pub fn from_glyph(c: char) -> Option<Terrain> {
        match c {
            '.' => Some(Terrain::Ground),
            '^' => Some(Terrain::Elevated),
            _   => None,
        }
    }
}

// ── TerrainGrid ───────────────────────────────────────────────────────────────

/// An `rows × cols` table of [`Terrain`], fixed for the lifetime of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    rows:  usize,
    cols:  usize,
    cells: Vec<Terrain>,
}

impl TerrainGrid {
    /// A grid with every cell set to `terrain`.
    pub fn filled(rows: usize, cols: usize, terrain: Terrain) -> Self {
        Self { rows, cols, cells: vec![terrain; rows * cols] }
    }

    /// Generate a grid where each cell is independently elevated with
    /// probability `elevation_percent / 100`.
    ///
    /// Cells are drawn row by row, left to right.  Bounds on `rows`, `cols`
    /// and `elevation_percent` are the caller's responsibility.
    pub fn generate(rows: usize, cols: usize, elevation_percent: u8, rng: &mut RoundRng) -> Self {
        let cells = (0..rows * cols)
            .map(|_| {
                if rng.percent_chance(elevation_percent) {
                    Terrain::Elevated
                } else {
                    Terrain::Ground
                }
            })
            .collect();
        Self { rows, cols, cells }
    }

    /// Parse a grid from legend glyphs, one line per row.
    ///
    /// Whitespace inside a line is ignored so rendered output (`". ^ ."`)
    /// parses back.  Blank lines are skipped.
    pub fn from_ascii(text: &str) -> TerrainResult<Self> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = None;

        for (line_no, line) in text.lines().enumerate() {
            let row: Vec<Terrain> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Terrain::from_glyph(c).ok_or_else(|| {
                        TerrainError::Malformed(format!("unknown glyph {c:?} on line {}", line_no + 1))
                    })
                })
                .collect::<TerrainResult<_>>()?;
            if row.is_empty() {
                continue;
            }
            match cols {
                None => cols = Some(row.len()),
                Some(n) if n != row.len() => {
                    return Err(TerrainError::Malformed(format!(
                        "line {} has {} cells, expected {n}",
                        line_no + 1,
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            cells.extend(row);
            rows += 1;
        }

        Ok(Self { rows, cols: cols.unwrap_or(0), cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        (r < self.rows && col < self.cols).then(|| r * self.cols + col)
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index_of(c).is_some()
    }

    /// Terrain at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Terrain> {
        self.index_of(c).map(|i| self.cells[i])
    }

    /// `true` if `c` is in bounds and passable.
    #[inline]
    pub fn is_ground(&self, c: Coord) -> bool {
        self.get(c) == Some(Terrain::Ground)
    }

    /// Overwrite one cell.  Out-of-bounds writes are ignored.
    pub fn set(&mut self, c: Coord, terrain: Terrain) {
        if let Some(i) = self.index_of(c) {
            self.cells[i] = terrain;
        }
    }

    pub fn ground_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t == Terrain::Ground).count()
    }

    /// Iterate rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Terrain]> {
        // `max(1)` keeps `chunks` happy on a zero-column grid.
        self.cells.chunks(self.cols.max(1))
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
