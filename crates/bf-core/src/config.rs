//! Round parameters and the bounds they are validated against.

use crate::{BfError, BfResult};

// ── RoundLimits ───────────────────────────────────────────────────────────────

/// Inclusive bounds on round parameters.
///
/// The core operations assume their inputs already satisfy these; the
/// configuration layer calls [`RoundConfig::validate`] before invoking them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLimits {
    pub min_size:              usize,
    pub max_size:              usize,
    pub min_units:             usize,
    pub max_units:             usize,
    pub min_elevation_percent: u8,
    pub max_elevation_percent: u8,
}

impl Default for RoundLimits {
    fn default() -> Self {
        Self {
            min_size:              7,
            max_size:              64,
            min_units:             1,
            max_units:             4,
            min_elevation_percent: 0,
            max_elevation_percent: 80,
        }
    }
}

// ── RoundConfig ───────────────────────────────────────────────────────────────

/// Parameters for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundConfig {
    pub rows: usize,
    pub cols: usize,

    /// Number of units to place and route.
    pub unit_count: usize,

    /// Probability (0–100) that any given cell is elevated.
    pub elevation_percent: u8,

    /// RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Rejection-sampling attempts allowed per sampled coordinate before the
    /// endpoint sampler gives up.
    pub max_sampling_attempts: u32,
}

impl RoundConfig {
    pub const DEFAULT_SAMPLING_ATTEMPTS: u32 = 10_000;

    /// A `side × side` map with default sampling bounds and no fixed seed.
    pub fn square(side: usize, unit_count: usize, elevation_percent: u8) -> Self {
        Self {
            rows: side,
            cols: side,
            unit_count,
            elevation_percent,
            seed: None,
            max_sampling_attempts: Self::DEFAULT_SAMPLING_ATTEMPTS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter against `limits`.
    pub fn validate(&self, limits: &RoundLimits) -> BfResult<()> {
        check_range("rows", self.rows, limits.min_size, limits.max_size)?;
        check_range("cols", self.cols, limits.min_size, limits.max_size)?;
        check_range("unit count", self.unit_count, limits.min_units, limits.max_units)?;
        check_range(
            "elevation percent",
            self.elevation_percent,
            limits.min_elevation_percent,
            limits.max_elevation_percent.min(100),
        )?;
        if self.max_sampling_attempts == 0 {
            return Err(BfError::Config("max sampling attempts must be at least 1".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

fn check_range<T>(what: &str, value: T, min: T, max: T) -> BfResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(BfError::Config(format!(
            "{what} {value} is outside the allowed range {min}..={max}"
        )));
    }
    Ok(())
}
