//! Integration tests for the monopole fit pipelines.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: validated observation table, likelihood
//!   target, seeded ensemble sampling, autocorrelation gate, thinning, and
//!   16/50/84 posterior summaries.
//! - Exercise the realistic regime: FIRAS-like wavenumber coverage
//!   (2.27–21.33 cm⁻¹, 43 channels), a noisy blackbody monopole near
//!   2.725 K, and a residual column consistent with zero distortion.
//!
//! Coverage
//! --------
//! - `data::MonopoleTable` construction from synthetic columns.
//! - `fit::fit_joint`: three-parameter recovery and interval calibration.
//! - `fit::fit_y_distortion` / `fit::fit_mu_distortion`: null-amplitude
//!   recovery from a noise-only residual spectrum.
//! - Seeded reproducibility of a complete pipeline run.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of the spectral models, likelihoods, sampler
//!   mechanics, and estimators — covered by unit tests in their modules.
//! - Convergence-failure paths (short chains, frozen dimensions) — covered
//!   by the posterior unit tests.
use cmb_spectral_fit::{
    data::MonopoleTable,
    fit,
    sampler::SamplerConfig,
    spectra::{blackbody, T_CMB},
};
use ndarray::Array1;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Per-channel Gaussian noise level, MJy/sr.
const NOISE_SIGMA: f64 = 0.02;

/// Number of spectral channels.
const N_CHANNELS: usize = 43;

/// Purpose
/// -------
/// Build a synthetic observation table with known ground truth: the
/// monopole column is a 2.725 K blackbody plus seeded Gaussian noise of
/// width [`NOISE_SIGMA`], and the residual column is the same noise with
/// the blackbody removed, i.e. zero true distortion.
///
/// Returns
/// -------
/// - A validated `MonopoleTable` spanning 2.27–21.33 cm⁻¹ in
///   [`N_CHANNELS`] channels, with a constant `sigma` column equal to the
///   injected noise level and a zero galaxy column.
fn make_synthetic_table(seed: u64) -> MonopoleTable {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = StdRng::seed_from_u64(seed);
    let nu = Array1::linspace(2.27, 21.33, N_CHANNELS);
    let clean = blackbody(nu.view(), T_CMB)
        .expect("blackbody should accept positive frequencies and T = 2.725");
    let noise = Array1::from_shape_fn(N_CHANNELS, |_| {
        let draw: f64 = rng.sample(StandardNormal);
        NOISE_SIGMA * draw
    });
    let monopole = &clean + &noise;
    let residual = noise;
    let sigma = Array1::from_elem(N_CHANNELS, NOISE_SIGMA);
    let galaxy = Array1::zeros(N_CHANNELS);
    MonopoleTable::new(nu, monopole, residual, sigma, galaxy)
        .expect("synthetic columns should satisfy the table invariants")
}

#[test]
// Purpose
// -------
// The joint three-parameter pipeline recovers the injected ground truth:
// T near 2.725 K and both distortion amplitudes consistent with zero.
//
// Given
// -----
// - A synthetic table with T = 2.725 K, y = 0, μ = 0, and 0.02 MJy/sr
//   channel noise.
// - Default sampler settings (32 walkers, stretch scale 2) for 5000
//   iterations from the guess (2.725, 0, 0).
//
// Expect
// ------
// - The run passes the autocorrelation reliability gate.
// - Each of the three medians lies within three interval half-widths of
//   its true value (the 68% intervals make this a loose, stable bound).
// - The acceptance rate is neither degenerate nor saturated.
// - χ² values are finite for every flat sample, and exceed the known
//   normalization offset 3·N·ln(2πσ²) (the joint likelihood keeps the
//   Gaussian normalization, so χ² minus that offset is the residual sum
//   of squares, which is strictly positive on noisy data).
fn joint_fit_recovers_temperature_and_null_distortions() {
    let table = make_synthetic_table(314);
    let config = SamplerConfig::with_defaults(5000, 2718)
        .expect("default sampler configuration should validate");

    let outcome = fit::fit_joint(&table, config, T_CMB, 0.0, 0.0)
        .expect("joint fit should converge on well-behaved synthetic data");

    assert_eq!(outcome.summary.len(), 3);
    let truths = [T_CMB, 0.0, 0.0];
    for (summary, truth) in outcome.summary.iter().zip(truths) {
        let half_width = summary.minus.max(summary.plus);
        assert!(half_width > 0.0, "interval should have nonzero width: {summary}");
        assert!(
            (summary.median - truth).abs() < 3.0 * half_width,
            "median {} should be within 3 half-widths ({half_width}) of {truth}",
            summary.median
        );
    }

    assert!(
        outcome.acceptance_rate > 0.1 && outcome.acceptance_rate < 0.95,
        "acceptance rate = {}",
        outcome.acceptance_rate
    );
    assert_eq!(outcome.taus.len(), 3);
    assert!(outcome.taus.iter().all(|tau| *tau > 0.0));
    assert_eq!(outcome.chi_square.len(), outcome.flat_samples.nrows());
    // χ² = SSR + 3·N·ln(2πσ²): the normalization term is kept, so only the
    // offset-corrected value is sign-definite.
    let normalization =
        3.0 * N_CHANNELS as f64 * (std::f64::consts::TAU * NOISE_SIGMA * NOISE_SIGMA).ln();
    assert!(outcome
        .chi_square
        .iter()
        .all(|chi| chi.is_finite() && chi - normalization > 0.0));
}

#[test]
// Purpose
// -------
// The single-amplitude distortion pipelines, run on a residual spectrum
// that contains only noise, both report amplitudes consistent with zero.
//
// Given
// -----
// - The same synthetic table (true y = μ = 0).
// - 3000-iteration runs with default walkers, seeded independently.
//
// Expect
// ------
// - |median| < 3 half-widths for both the y and μ fits.
fn distortion_fits_are_consistent_with_zero_on_noise_only_residuals() {
    let table = make_synthetic_table(159);

    let y_config = SamplerConfig::with_defaults(3000, 26)
        .expect("default sampler configuration should validate");
    let y_outcome = fit::fit_y_distortion(&table, y_config, 0.0)
        .expect("y fit should converge on noise-only residuals");
    let y_summary = y_outcome.summary[0];
    let y_half_width = y_summary.minus.max(y_summary.plus);
    assert!(
        y_summary.median.abs() < 3.0 * y_half_width,
        "y median {} should be consistent with zero (half-width {y_half_width})",
        y_summary.median
    );

    let mu_config = SamplerConfig::with_defaults(3000, 53)
        .expect("default sampler configuration should validate");
    let mu_outcome = fit::fit_mu_distortion(&table, mu_config, 0.0)
        .expect("mu fit should converge on noise-only residuals");
    let mu_summary = mu_outcome.summary[0];
    let mu_half_width = mu_summary.minus.max(mu_summary.plus);
    assert!(
        mu_summary.median.abs() < 3.0 * mu_half_width,
        "mu median {} should be consistent with zero (half-width {mu_half_width})",
        mu_summary.median
    );
}

#[test]
// Purpose
// -------
// A complete pipeline run is reproducible: identical seed, data, and
// configuration yield identical chains and summaries, and a different
// seed yields a different chain.
//
// Given
// -----
// - Two temperature fits with seed 7 on the same table, and one with
//   seed 8.
//
// Expect
// ------
// - The seed-7 outcomes are equal in every field.
// - The seed-8 chain differs from the seed-7 chain.
fn pipeline_is_reproducible_for_a_fixed_seed() {
    let table = make_synthetic_table(42);
    let config = |seed: u64| {
        SamplerConfig::with_defaults(2000, seed)
            .expect("default sampler configuration should validate")
    };

    let first = fit::fit_temperature(&table, config(7), T_CMB)
        .expect("temperature fit should converge");
    let second = fit::fit_temperature(&table, config(7), T_CMB)
        .expect("temperature fit should converge");
    let third = fit::fit_temperature(&table, config(8), T_CMB)
        .expect("temperature fit should converge");

    assert_eq!(first, second);
    assert_ne!(first.chain, third.chain);
}
