//! Integrated autocorrelation time and the burn-in/thinning plan.
use crate::posterior::errors::{PosteriorError, PosteriorResult};
use crate::sampler::chain::Chain;
use ndarray::{s, Array1};

/// Sokal automatic-windowing factor c: the lag window closes at the first
/// lag M with M ≥ c·τ(M).
pub const WINDOW_FACTOR: f64 = 5.0;

/// A τ estimate is only trusted when the chain is at least this many τ long.
pub const RELIABILITY_FACTOR: f64 = 50.0;

/// Burn-in and thinning factors derived from autocorrelation times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinningPlan {
    /// Iterations to drop from the start of every walker.
    pub discard: usize,
    /// Stride between kept iterations.
    pub thin: usize,
}

/// Estimate the integrated autocorrelation time per parameter dimension.
///
/// For each dimension the walker-averaged autocovariance
/// `c(t) = meanᵂ[ (1/n) Σᵢ yᵢ·yᵢ₊ₜ ]` (walker series mean-subtracted) is
/// accumulated into the running estimate `τ(M) = 1 + 2·Σₜ₌₁ᴹ c(t)/c(0)`,
/// and the lag window closes at the first M with M ≥ [`WINDOW_FACTOR`]·τ(M)
/// (Sokal's criterion, the emcee convention).
///
/// Returns
/// -------
/// `PosteriorResult<Array1<f64>>` — τ per dimension, only when every
/// dimension's chain is at least [`RELIABILITY_FACTOR`]·τ iterations long.
///
/// Errors
/// ------
/// - `PosteriorError::ChainTooShort` when the reliability gate fails; the
///   error carries the tentative τ and the iteration count it would
///   require, so the caller extends the run instead of trusting a
///   misleading estimate.
/// - `PosteriorError::ZeroVarianceChain` when a dimension never moved.
pub fn integrated_autocorr_time(chain: &Chain) -> PosteriorResult<Array1<f64>> {
    let n_iterations = chain.n_iterations();
    let n_walkers = chain.n_walkers();
    let n_dim = chain.n_dim();
    let samples = chain.samples();

    let mut taus = Array1::zeros(n_dim);
    for dimension in 0..n_dim {
        // Mean-subtracted per-walker series, plus the raw mean square for
        // the variance gate below.
        let mut series: Vec<Array1<f64>> = Vec::with_capacity(n_walkers);
        let mut raw_square_sum = 0.0;
        for walker in 0..n_walkers {
            let mut column = samples.slice(s![.., walker, dimension]).to_owned();
            raw_square_sum += column.iter().map(|v| v * v).sum::<f64>();
            let mean = column.sum() / n_iterations as f64;
            column.mapv_inplace(|v| v - mean);
            series.push(column);
        }
        let raw_mean_square = raw_square_sum / (n_walkers * n_iterations) as f64;

        // A frozen dimension leaves rounding residue of order ε·|value| after
        // the mean subtraction, so c0 is compared against the raw scale of
        // the series rather than exact zero.
        let c0 = mean_autocovariance(&series, 0, n_iterations);
        if c0 <= f64::EPSILON * raw_mean_square {
            return Err(PosteriorError::ZeroVarianceChain { dimension });
        }

        // τ(M) = 1 + 2·Σ f(t); stop at the first closed window.
        let mut tau = 1.0;
        let mut windowed = false;
        for lag in 1..n_iterations {
            tau += 2.0 * mean_autocovariance(&series, lag, n_iterations) / c0;
            if (lag as f64) >= WINDOW_FACTOR * tau {
                windowed = true;
                break;
            }
        }

        let required = (RELIABILITY_FACTOR * tau).ceil() as usize;
        if !windowed || n_iterations < required {
            return Err(PosteriorError::ChainTooShort {
                dimension,
                tau,
                n_iterations,
                required: required.max(n_iterations + 1),
            });
        }
        taus[dimension] = tau;
    }
    Ok(taus)
}

/// Burn-in and thinning derived from the chain's own τ estimates.
///
/// Uses the most conservative (largest) dimension: discard `⌈2·τ_max⌉`
/// iterations as burn-in and keep every `max(1, ⌊τ_max/2⌋)`-th sample. For
/// the joint chain this deliberately ignores every other chain's τ.
pub fn thinning_plan(taus: &Array1<f64>) -> ThinningPlan {
    let tau_max = taus.iter().cloned().fold(0.0_f64, f64::max);
    ThinningPlan {
        discard: (2.0 * tau_max).ceil() as usize,
        thin: ((tau_max / 2.0).floor() as usize).max(1),
    }
}

/// Walker-averaged biased autocovariance at one lag.
fn mean_autocovariance(series: &[Array1<f64>], lag: usize, n: usize) -> f64 {
    let mut total = 0.0;
    for walker_series in series {
        let mut sum = 0.0;
        for i in 0..n - lag {
            sum += walker_series[i] * walker_series[i + lag];
        }
        total += sum / n as f64;
    }
    total / series.len() as f64
}
