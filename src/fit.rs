//! fit — end-to-end pipelines from observation table to posterior report.
//!
//! Purpose
//! -------
//! Wire the pieces together in the order every analysis runs them: build a
//! likelihood target on a validated [`MonopoleTable`], sample it with the
//! seeded ensemble sampler, gate on the integrated autocorrelation time,
//! flatten with the chain's own burn-in/thinning plan, and summarize the
//! marginals plus the χ² distribution.
//!
//! Key behaviors
//! -------------
//! - One public entry point per physical model: blackbody temperature,
//!   Compton-y, chemical potential μ, and the joint three-parameter fit.
//!   All four share a single private driver, so the pipeline stages cannot
//!   drift apart between models.
//! - Each fit is self-contained: its own target, its own sampler, its own
//!   τ estimates. The joint fit derives burn-in and thinning from its own
//!   chain, never from the single-parameter runs.
//! - Convergence failures propagate as [`PosteriorError::ChainTooShort`]
//!   with the iteration count that would suffice; callers rerun with a
//!   longer configuration rather than receiving a silently biased summary.
//!
//! Downstream usage
//! ----------------
//! `let outcome = fit::fit_joint(&table, config, 2.725, 0.0, 0.0)?;`
use crate::data::MonopoleTable;
use crate::likelihood::targets::{
    JointTarget, MuDistortionTarget, TemperatureTarget, YDistortionTarget,
};
use crate::posterior::autocorr::{integrated_autocorr_time, thinning_plan};
use crate::posterior::errors::PosteriorError;
use crate::posterior::summary::{goodness_of_fit, summarize, ParameterSummary};
use crate::sampler::chain::Chain;
use crate::sampler::config::SamplerConfig;
use crate::sampler::ensemble::EnsembleSampler;
use crate::sampler::errors::SamplerError;
use crate::sampler::traits::LogProbability;
use log::debug;
use ndarray::{Array1, Array2};

/// Result alias for the fit pipelines.
pub type FitResult<T> = Result<T, FitError>;

/// Union of everything a pipeline stage can report.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Sampler configuration or run failure.
    Sampler(SamplerError),

    /// Convergence or summary failure.
    Posterior(PosteriorError),
}

impl std::error::Error for FitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FitError::Sampler(err) => Some(err),
            FitError::Posterior(err) => Some(err),
        }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::Sampler(err) => write!(f, "Sampler stage failed: {err}"),
            FitError::Posterior(err) => write!(f, "Posterior stage failed: {err}"),
        }
    }
}

impl From<SamplerError> for FitError {
    fn from(err: SamplerError) -> Self {
        FitError::Sampler(err)
    }
}

impl From<PosteriorError> for FitError {
    fn from(err: PosteriorError) -> Self {
        FitError::Posterior(err)
    }
}

/// Everything one completed fit produces.
///
/// Fields
/// ------
/// - `chain`: the full (iteration × walker × dimension) ensemble, kept for
///   further diagnostics.
/// - `taus`: integrated autocorrelation time per parameter.
/// - `flat_samples`: burn-in-discarded, thinned, iteration-major flat
///   matrix the summaries were computed from.
/// - `summary`: 16/50/84-percentile point estimate per parameter.
/// - `chi_square`: χ² = −2·logL over every flat sample.
/// - `acceptance_rate`: fraction of proposals accepted over the run.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub chain: Chain,
    pub taus: Array1<f64>,
    pub flat_samples: Array2<f64>,
    pub summary: Vec<ParameterSummary>,
    pub chi_square: Array1<f64>,
    pub acceptance_rate: f64,
}

/// Fit the blackbody temperature to the monopole spectrum, θ = [T].
pub fn fit_temperature(
    table: &MonopoleTable, config: SamplerConfig, initial_temperature: f64,
) -> FitResult<FitOutcome> {
    let target = TemperatureTarget::new(table);
    run_fit(&target, config, Array1::from_vec(vec![initial_temperature]))
}

/// Fit the Compton-y distortion to the residual spectrum, θ = [y].
pub fn fit_y_distortion(
    table: &MonopoleTable, config: SamplerConfig, initial_y: f64,
) -> FitResult<FitOutcome> {
    let target = YDistortionTarget::new(table);
    run_fit(&target, config, Array1::from_vec(vec![initial_y]))
}

/// Fit the chemical-potential distortion to the residual spectrum, θ = [μ].
pub fn fit_mu_distortion(
    table: &MonopoleTable, config: SamplerConfig, initial_mu: f64,
) -> FitResult<FitOutcome> {
    let target = MuDistortionTarget::new(table);
    run_fit(&target, config, Array1::from_vec(vec![initial_mu]))
}

/// Fit temperature and both distortions together, θ = [T, y, μ].
pub fn fit_joint(
    table: &MonopoleTable, config: SamplerConfig, initial_temperature: f64, initial_y: f64,
    initial_mu: f64,
) -> FitResult<FitOutcome> {
    let target = JointTarget::new(table);
    run_fit(
        &target,
        config,
        Array1::from_vec(vec![initial_temperature, initial_y, initial_mu]),
    )
}

/// Shared pipeline: sample, gate on τ, flatten, summarize.
fn run_fit<T: LogProbability>(
    target: &T, config: SamplerConfig, initial_guess: Array1<f64>,
) -> FitResult<FitOutcome> {
    let sampler = EnsembleSampler::new(target, config)?;
    let chain = sampler.run(initial_guess.view())?;

    let taus = integrated_autocorr_time(&chain)?;
    let plan = thinning_plan(&taus);
    debug!(
        "autocorrelation gate passed: taus = {:?}, discard = {}, thin = {}",
        taus.to_vec(),
        plan.discard,
        plan.thin
    );

    let flat_samples = chain.flatten(plan.discard, plan.thin)?;
    let summary = summarize(flat_samples.view())?;
    let chi_square = goodness_of_fit(flat_samples.view(), target)?;
    let acceptance_rate = chain.acceptance_rate();

    Ok(FitOutcome { chain, taus, flat_samples, summary, chi_square, acceptance_rate })
}
