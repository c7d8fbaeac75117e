//! Terrain-subsystem error type.

use thiserror::Error;

use bf_core::UnitId;

/// Errors produced by `bf-terrain`.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The grid cannot hold the requested endpoints: every start needs its
    /// own ground cell and every target must differ from its start.
    #[error("infeasible configuration: {ground_cells} ground cells, at least {required} required")]
    Infeasible { ground_cells: usize, required: usize },

    /// Rejection sampling ran out of attempts for one coordinate.
    #[error("no valid endpoint found for {unit} after {attempts} attempts")]
    SamplingExhausted { unit: UnitId, attempts: u32 },

    #[error("at least one unit is required")]
    ZeroUnits,

    /// A textual grid could not be parsed.
    #[error("malformed grid: {0}")]
    Malformed(String),
}

pub type TerrainResult<T> = Result<T, TerrainError>;
