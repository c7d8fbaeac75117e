//! Fluent builder for constructing a [`Round`].

use bf_core::{RoundConfig, RoundLimits, RoundRng};
use bf_route::Router;
use bf_terrain::{Endpoints, TerrainGrid};

use crate::{Round, RoundError, RoundResult};

/// Fluent builder for [`Round<R>`].
///
/// # Required inputs
///
/// - [`RoundConfig`]: grid size, unit count, elevation, seed
/// - `R: Router`: the route search (e.g. [`bf_route::DfsRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                               |
/// |-------------------|---------------------------------------|
/// | `.limits(l)`      | `RoundLimits::default()`              |
/// | `.grid(g)`        | Generated from the config             |
/// | `.endpoints(e)`   | Sampled on the grid                   |
///
/// # Example
///
/// ```rust,ignore
/// let outcome = RoundBuilder::new(RoundConfig::square(8, 2, 10), DfsRouter)
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
pub struct RoundBuilder<R: Router> {
    config:    RoundConfig,
    limits:    RoundLimits,
    router:    R,
    grid:      Option<TerrainGrid>,
    endpoints: Option<Endpoints>,
}

impl<R: Router> RoundBuilder<R> {
    pub fn new(config: RoundConfig, router: R) -> Self {
        Self {
            config,
            limits:    RoundLimits::default(),
            router,
            grid:      None,
            endpoints: None,
        }
    }

    /// Bounds the config is validated against.
    pub fn limits(mut self, limits: RoundLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Use `grid` instead of generating one.  Its dimensions must match
    /// `config.rows × config.cols`.
    pub fn grid(mut self, grid: TerrainGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Use fixed endpoints instead of sampling.  Must hold exactly
    /// `config.unit_count` units and obey the placement rules on the grid:
    /// every start and target on ground, distinct starts, and each target
    /// apart from its own start.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Validate inputs, resolve the seed, and return a ready-to-run [`Round`].
    pub fn build(self) -> RoundResult<Round<R>> {
        self.config.validate(&self.limits)?;

        if let Some(grid) = &self.grid {
            if (grid.rows(), grid.cols()) != (self.config.rows, self.config.cols) {
                return Err(RoundError::Mismatch {
                    expected: format!("{}x{}", self.config.rows, self.config.cols),
                    got:      format!("{}x{}", grid.rows(), grid.cols()),
                    what:     "supplied grid",
                });
            }
        }

        if let Some(endpoints) = &self.endpoints {
            if endpoints.len() != self.config.unit_count
                || endpoints.targets.len() != endpoints.starts.len()
            {
                return Err(RoundError::Mismatch {
                    expected: format!("{} units", self.config.unit_count),
                    got:      format!(
                        "{} starts and {} targets",
                        endpoints.starts.len(),
                        endpoints.targets.len()
                    ),
                    what:     "supplied endpoints",
                });
            }
        }

        if let (Some(grid), Some(endpoints)) = (&self.grid, &self.endpoints) {
            check_endpoints(grid, endpoints)?;
        }

        // Unseeded rounds still get a concrete seed so they can be replayed.
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| RoundRng::from_entropy().next_u64());

        Ok(Round {
            rng:       RoundRng::new(seed),
            seed,
            config:    self.config,
            router:    self.router,
            grid:      self.grid,
            endpoints: self.endpoints,
        })
    }
}

/// Enforce the placement rules on endpoints that were not sampled.
pub(crate) fn check_endpoints(grid: &TerrainGrid, endpoints: &Endpoints) -> RoundResult<()> {
    for (unit, start, target) in endpoints.iter() {
        let reason = if !grid.is_ground(start) {
            "start is not on ground"
        } else if !grid.is_ground(target) {
            "target is not on ground"
        } else if start == target {
            "target equals its own start"
        } else if endpoints.starts[..unit.index()].contains(&start) {
            "start is already taken by a lower unit"
        } else {
            continue;
        };
        return Err(RoundError::InvalidEndpoint { unit, reason });
    }
    Ok(())
}
