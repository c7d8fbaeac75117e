//! Unit identifiers.
//!
//! `UnitId` is `Copy + Ord + Hash` so it can key maps and sort without
//! ceremony.  Routes and endpoints are stored per unit in `Vec`s indexed by
//! `.index()`.

use std::fmt;

/// Identifier of a mobile unit within one round, in `[0, unit_count)`.
///
/// Lower IDs take precedence when two units contend for a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate `UnitId(0)..UnitId(count)`.
    pub fn range(count: usize) -> impl Iterator<Item = UnitId> {
        (0..count as u32).map(UnitId)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}
