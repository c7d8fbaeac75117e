use bf_core::{BfError, UnitId};
use bf_terrain::TerrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Config(#[from] BfError),

    #[error("{what} has {got}, config expects {expected}")]
    Mismatch {
        expected: String,
        got:      String,
        what:     &'static str,
    },

    #[error("supplied endpoints for {unit}: {reason}")]
    InvalidEndpoint {
        unit:   UnitId,
        reason: &'static str,
    },

    #[error("terrain error: {0}")]
    Terrain(#[from] TerrainError),
}

pub type RoundResult<T> = Result<T, RoundError>;
