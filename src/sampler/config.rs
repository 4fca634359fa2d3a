//! Validated run configuration for the ensemble sampler.
use crate::sampler::errors::{SamplerError, SamplerResult};

/// Default number of walkers in the ensemble.
pub const DEFAULT_N_WALKERS: usize = 32;

/// Default stretch-move scale parameter a (Goodman–Weare recommend 2).
pub const DEFAULT_STRETCH_SCALE: f64 = 2.0;

/// Default standard deviation of the Gaussian ball of initial positions
/// around the caller's guess.
pub const DEFAULT_INITIAL_SPREAD: f64 = 1.0e-4;

/// `SamplerConfig` — everything a run needs, passed explicitly.
///
/// Purpose
/// -------
/// Replace ambient notebook state (global seeds, implicit walker counts)
/// with one validated configuration object. Each field is a named argument
/// to the run; no globals are consulted anywhere in the sampler.
///
/// Fields
/// ------
/// - `n_walkers`: ensemble size; even, ≥ 4, and ≥ 2·ndim (checked again
///   against the target at sampler construction).
/// - `n_iterations`: chain length; > 0.
/// - `seed`: explicit PRNG seed; two runs with equal seed, inputs, and
///   iteration count reproduce the same chain.
/// - `stretch_scale`: the stretch-move scale a; finite, > 1.
/// - `initial_spread`: σ of the initial Gaussian perturbation; finite, > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub n_walkers: usize,
    pub n_iterations: usize,
    pub seed: u64,
    pub stretch_scale: f64,
    pub initial_spread: f64,
}

impl SamplerConfig {
    /// Construct a validated configuration.
    ///
    /// Errors
    /// ------
    /// - `SamplerError::InvalidWalkerCount` if `n_walkers` is odd or < 4
    ///   (the stretch move needs a non-empty complementary half).
    /// - `SamplerError::InvalidIterationCount` if `n_iterations == 0`.
    /// - `SamplerError::InvalidStretchScale` if `stretch_scale` is NaN, ±∞,
    ///   or ≤ 1.
    /// - `SamplerError::InvalidInitialSpread` if `initial_spread` is NaN,
    ///   ±∞, or ≤ 0.
    pub fn new(
        n_walkers: usize, n_iterations: usize, seed: u64, stretch_scale: f64,
        initial_spread: f64,
    ) -> SamplerResult<Self> {
        if n_walkers < 4 {
            return Err(SamplerError::InvalidWalkerCount {
                n_walkers,
                reason: "at least 4 walkers are required",
            });
        }
        if n_walkers % 2 != 0 {
            return Err(SamplerError::InvalidWalkerCount {
                n_walkers,
                reason: "walker count must be even for the half-ensemble sweep",
            });
        }
        if n_iterations == 0 {
            return Err(SamplerError::InvalidIterationCount { n_iterations });
        }
        if !stretch_scale.is_finite() {
            return Err(SamplerError::InvalidStretchScale {
                value: stretch_scale,
                reason: "stretch scale must be finite",
            });
        }
        if stretch_scale <= 1.0 {
            return Err(SamplerError::InvalidStretchScale {
                value: stretch_scale,
                reason: "stretch scale must be strictly greater than 1",
            });
        }
        if !initial_spread.is_finite() || initial_spread <= 0.0 {
            return Err(SamplerError::InvalidInitialSpread {
                value: initial_spread,
                reason: "spread must be finite and strictly positive",
            });
        }
        Ok(Self { n_walkers, n_iterations, seed, stretch_scale, initial_spread })
    }

    /// Convenience constructor with default walkers, scale, and spread.
    pub fn with_defaults(n_iterations: usize, seed: u64) -> SamplerResult<Self> {
        Self::new(
            DEFAULT_N_WALKERS,
            n_iterations,
            seed,
            DEFAULT_STRETCH_SCALE,
            DEFAULT_INITIAL_SPREAD,
        )
    }
}
