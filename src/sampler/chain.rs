//! Read-only sample ensemble produced by a sampler run.
use crate::sampler::errors::{SamplerError, SamplerResult};
use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};

/// `Chain` — the (iteration × walker × dimension) sample ensemble.
///
/// Purpose
/// -------
/// Own the full output of one sampler run: every walker position at every
/// iteration, the matching log-probabilities, and the acceptance count.
/// Built append-only by [`crate::sampler::EnsembleSampler::run`]; read-only
/// afterward — the posterior summarizer only ever borrows it.
///
/// Invariants
/// ----------
/// - `samples.shape() == [n_iterations, n_walkers, n_dim]` with every axis
///   non-zero.
/// - `log_probs.shape() == [n_iterations, n_walkers]`.
/// - All walker positions are finite (the sampler never accepts a
///   non-finite coordinate).
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    samples: Array3<f64>,
    log_probs: Array2<f64>,
    accepted: usize,
}

impl Chain {
    pub(crate) fn new(samples: Array3<f64>, log_probs: Array2<f64>, accepted: usize) -> Self {
        debug_assert_eq!(samples.shape()[0], log_probs.shape()[0]);
        debug_assert_eq!(samples.shape()[1], log_probs.shape()[1]);
        Chain { samples, log_probs, accepted }
    }

    /// Number of recorded iterations.
    pub fn n_iterations(&self) -> usize {
        self.samples.shape()[0]
    }

    /// Number of walkers in the ensemble.
    pub fn n_walkers(&self) -> usize {
        self.samples.shape()[1]
    }

    /// Parameter dimension.
    pub fn n_dim(&self) -> usize {
        self.samples.shape()[2]
    }

    /// Full sample array, (iteration × walker × dimension).
    pub fn samples(&self) -> ArrayView3<'_, f64> {
        self.samples.view()
    }

    /// Log-probability of every stored position, (iteration × walker).
    pub fn log_probs(&self) -> ArrayView2<'_, f64> {
        self.log_probs.view()
    }

    /// Fraction of proposals accepted over the whole run.
    pub fn acceptance_rate(&self) -> f64 {
        self.accepted as f64 / (self.n_iterations() * self.n_walkers()) as f64
    }

    /// Flatten the ensemble into one (sample × dimension) matrix.
    ///
    /// Discards the first `discard` iterations of every walker (burn-in),
    /// keeps every `thin`-th remaining iteration, and merges walkers in
    /// ITERATION-MAJOR order: the outer loop runs over kept iterations, the
    /// inner loop over walkers, so rows are
    /// `(iter d, walker 0), (iter d, walker 1), …, (iter d+thin, walker 0), …`.
    ///
    /// The result has `⌈(n_iterations − discard)/thin⌉ · n_walkers` rows.
    ///
    /// Errors
    /// ------
    /// - `SamplerError::InvalidThin` if `thin == 0`.
    /// - `SamplerError::DiscardExceedsChain` if `discard >= n_iterations`.
    pub fn flatten(&self, discard: usize, thin: usize) -> SamplerResult<Array2<f64>> {
        if thin == 0 {
            return Err(SamplerError::InvalidThin { thin });
        }
        let n_iterations = self.n_iterations();
        if discard >= n_iterations {
            return Err(SamplerError::DiscardExceedsChain { discard, n_iterations });
        }

        let kept = (n_iterations - discard).div_ceil(thin);
        let n_walkers = self.n_walkers();
        let n_dim = self.n_dim();
        let mut flat = Array2::zeros((kept * n_walkers, n_dim));
        let mut row = 0;
        for iteration in (discard..n_iterations).step_by(thin) {
            let step = self.samples.index_axis(Axis(0), iteration);
            for walker in 0..n_walkers {
                flat.row_mut(row).assign(&step.row(walker));
                row += 1;
            }
        }
        Ok(flat)
    }
}
