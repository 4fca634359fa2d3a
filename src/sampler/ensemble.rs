//! Goodman–Weare stretch-move ensemble sampler.
use crate::sampler::{
    chain::Chain,
    config::SamplerConfig,
    errors::{SamplerError, SamplerResult},
    traits::LogProbability,
};
use log::{debug, warn};
use ndarray::{Array1, Array2, Array3, ArrayView1};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// `EnsembleSampler` — affine-invariant ensemble MCMC over one target.
///
/// Purpose
/// -------
/// Bind a borrowed log-probability target to a validated [`SamplerConfig`]
/// and produce a [`Chain`] of posterior samples via the stretch move. One
/// sampler instance serves one fit; independent fits construct independent
/// instances and share nothing.
///
/// Key behaviors
/// -------------
/// - Walkers are initialized in a Gaussian ball of radius
///   `config.initial_spread` around the caller's guess.
/// - Each iteration performs a red/black sweep: the first half of the
///   ensemble updates against the frozen second half, then the second half
///   updates against the already-moved first half (the stretch move's
///   detailed-balance-preserving schedule).
/// - Proposals with non-finite log-probability are rejected by the
///   Metropolis test; they can never enter the stored chain, so every
///   recorded position is finite.
pub struct EnsembleSampler<'a, T: LogProbability> {
    target: &'a T,
    config: SamplerConfig,
}

impl<'a, T: LogProbability> EnsembleSampler<'a, T> {
    /// Bind a target to a configuration.
    ///
    /// Errors
    /// ------
    /// - `SamplerError::InvalidWalkerCount` if the configured ensemble is
    ///   smaller than twice the target dimension (the stretch move needs a
    ///   complementary half that spans the parameter space).
    pub fn new(target: &'a T, config: SamplerConfig) -> SamplerResult<Self> {
        if config.n_walkers < 2 * target.ndim() {
            return Err(SamplerError::InvalidWalkerCount {
                n_walkers: config.n_walkers,
                reason: "walker count must be at least twice the parameter dimension",
            });
        }
        Ok(Self { target, config })
    }

    /// Run the configured number of iterations from a perturbed guess.
    ///
    /// Parameters
    /// ----------
    /// - `initial_guess`: prior point estimate, length `target.ndim()`,
    ///   all coordinates finite. Each walker starts at
    ///   `guess + initial_spread · N(0, 1)` per dimension.
    ///
    /// Returns
    /// -------
    /// `SamplerResult<Chain>` — the full sample ensemble. Determinism:
    /// identical seed, guess, target, and iteration count reproduce the
    /// chain bit-for-bit (for a fixed crate and `rand` version; `StdRng`'s
    /// algorithm is an implementation detail of `rand`).
    ///
    /// Errors
    /// ------
    /// - `SamplerError::InitialGuessDimMismatch` / `NonFiniteInitialGuess`
    ///   for invalid guesses.
    /// - `SamplerError::AllWalkersNonFinite` if every walker's initial
    ///   log-probability is non-finite: the Metropolis test could then never
    ///   accept anything and the chain would stall, so the degenerate
    ///   likelihood is reported instead. Individual non-finite walkers are
    ///   tolerated — acceptance pulls them into the support.
    pub fn run(&self, initial_guess: ArrayView1<'_, f64>) -> SamplerResult<Chain> {
        let ndim = self.target.ndim();
        if initial_guess.len() != ndim {
            return Err(SamplerError::InitialGuessDimMismatch {
                expected: ndim,
                actual: initial_guess.len(),
            });
        }
        if let Some((index, &value)) =
            initial_guess.iter().enumerate().find(|(_, v)| !v.is_finite())
        {
            return Err(SamplerError::NonFiniteInitialGuess { index, value });
        }

        let n_walkers = self.config.n_walkers;
        let n_iterations = self.config.n_iterations;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        debug!(
            "starting ensemble run: {n_walkers} walkers, {n_iterations} iterations, \
             {ndim} dimensions, seed {}",
            self.config.seed
        );

        // Gaussian ball of walkers around the guess.
        let mut positions = Array2::zeros((n_walkers, ndim));
        for walker in 0..n_walkers {
            for dim in 0..ndim {
                let step: f64 = rng.sample(StandardNormal);
                positions[[walker, dim]] = initial_guess[dim] + self.config.initial_spread * step;
            }
        }

        let mut log_probs = Array1::from_shape_fn(n_walkers, |walker| {
            self.target.log_prob(positions.row(walker))
        });
        if log_probs.iter().all(|lp| !lp.is_finite()) {
            return Err(SamplerError::AllWalkersNonFinite { n_walkers });
        }

        let mut samples = Array3::zeros((n_iterations, n_walkers, ndim));
        let mut chain_log_probs = Array2::zeros((n_iterations, n_walkers));
        let mut accepted = 0usize;
        let half = n_walkers / 2;

        for iteration in 0..n_iterations {
            // Red/black sweep: each half moves against the other.
            accepted +=
                self.advance_half(&mut positions, &mut log_probs, 0..half, half, &mut rng);
            accepted +=
                self.advance_half(&mut positions, &mut log_probs, half..n_walkers, 0, &mut rng);

            for walker in 0..n_walkers {
                samples
                    .index_axis_mut(ndarray::Axis(0), iteration)
                    .row_mut(walker)
                    .assign(&positions.row(walker));
                chain_log_probs[[iteration, walker]] = log_probs[walker];
            }
        }

        let chain = Chain::new(samples, chain_log_probs, accepted);
        if accepted == 0 {
            warn!(
                "ensemble run rejected every proposal over {n_iterations} iterations; \
                 the likelihood may be degenerate or the stretch scale unsuitable"
            );
        } else {
            debug!("ensemble run finished: acceptance rate {:.3}", chain.acceptance_rate());
        }
        Ok(chain)
    }

    /// Stretch-move update of the walkers in `movers`, drawing complements
    /// from the half starting at `complement_start`. Returns the number of
    /// accepted proposals.
    fn advance_half(
        &self, positions: &mut Array2<f64>, log_probs: &mut Array1<f64>,
        movers: std::ops::Range<usize>, complement_start: usize, rng: &mut StdRng,
    ) -> usize {
        let ndim = self.target.ndim();
        let a = self.config.stretch_scale;
        let half = positions.nrows() / 2;
        let mut accepted = 0;
        let mut proposal = Array1::zeros(ndim);

        for walker in movers {
            let complement = complement_start + rng.gen_range(0..half);

            // z ~ g(z) ∝ 1/√z on [1/a, a], sampled by inverse transform.
            let u: f64 = rng.gen();
            let z = ((a - 1.0) * u + 1.0).powi(2) / a;

            for dim in 0..ndim {
                let x = positions[[walker, dim]];
                let c = positions[[complement, dim]];
                proposal[dim] = c + z * (x - c);
            }

            let proposal_log_prob = self.target.log_prob(proposal.view());
            let log_accept =
                (ndim as f64 - 1.0) * z.ln() + proposal_log_prob - log_probs[walker];

            // NaN (−∞ minus −∞) compares false on both branches: rejected.
            let accept = log_accept >= 0.0 || rng.gen::<f64>().ln() < log_accept;
            if accept {
                for dim in 0..ndim {
                    positions[[walker, dim]] = proposal[dim];
                }
                log_probs[walker] = proposal_log_prob;
                accepted += 1;
            }
        }
        accepted
    }
}
