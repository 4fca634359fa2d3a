//! likelihood — Gaussian log-likelihoods for the four monopole fits.
//!
//! Purpose
//! -------
//! Compare spectral-model predictions against the observation table under
//! independent Gaussian noise:
//!
//! `logL(θ) = −½ Σᵢ [ (dᵢ − mᵢ(θ))²/σᵢ² + ln(2π σᵢ²) ]`
//!
//! for four fit targets: temperature alone, y alone, μ alone, and the joint
//! {T, y, μ} fit.
//!
//! Key behaviors
//! -------------
//! - The `ln(2πσ²)` normalization term is KEPT (documented decision in
//!   [`gaussian`]): absolute log-likelihood values feed the χ²
//!   goodness-of-fit statistic downstream.
//! - Data-side violations (σ ≤ 0, non-finite inputs, length mismatches)
//!   fail fast with structured [`LikelihoodError`] values.
//! - Parameter-side violations (T ≤ 0, non-finite θ) evaluate to `−∞`
//!   (zero probability) so the sampler rejects that region gracefully
//!   instead of raising.
//!
//! Downstream usage
//! ----------------
//! - The free functions mirror the notebook's likelihoods one-to-one and
//!   validate on every call; the [`targets`] structs borrow a validated
//!   [`crate::data::MonopoleTable`] and implement
//!   [`crate::sampler::traits::LogProbability`] for the hot sampling path.

pub mod errors;
pub mod gaussian;
pub mod targets;

pub use self::errors::{LikelihoodError, LikelihoodResult};
pub use self::gaussian::{
    log_likelihood_joint, log_likelihood_mu, log_likelihood_temperature, log_likelihood_y,
};
pub use self::targets::{JointTarget, MuDistortionTarget, TemperatureTarget, YDistortionTarget};
