//! Target interface consumed by the ensemble sampler.
use ndarray::ArrayView1;

/// Log-probability target for ensemble sampling.
///
/// Implementors evaluate an (unnormalized) log-density over a fixed-size
/// parameter vector. The sampler calls [`LogProbability::log_prob`] on its
/// hot path with `theta.len() == ndim()`.
///
/// Conventions:
/// - Out-of-domain or zero-probability points return `f64::NEG_INFINITY`,
///   never NaN and never a panic; the Metropolis step then rejects them.
/// - Evaluation must be pure: the same `theta` always yields the same
///   value, with no side effects, so chains are reproducible.
pub trait LogProbability {
    /// Number of parameter dimensions the target expects.
    fn ndim(&self) -> usize;

    /// Evaluate the log-density at `theta`.
    fn log_prob(&self, theta: ArrayView1<'_, f64>) -> f64;
}
