//! spectra — blackbody and spectral-distortion models for the CMB monopole.
//!
//! Purpose
//! -------
//! Provide the pure model functions every likelihood in this crate is built
//! on: the Planck blackbody law, its analytic temperature derivative, and
//! the first-order μ-type (Bose–Einstein chemical potential) and y-type
//! (Compton scattering) spectral distortions.
//!
//! Key behaviors
//! -------------
//! - All functions are pure and deterministic: same inputs, same outputs,
//!   no side effects.
//! - Outputs are intensities in MJy/sr against wavenumber inputs in cm⁻¹,
//!   the same units as the observation table, so likelihoods compare
//!   predictions and data without further conversion.
//! - Small-x singularities (`exp(x) − 1` denominators at low frequency) are
//!   evaluated through `exp_m1` so the Rayleigh–Jeans regime is reached
//!   without catastrophic cancellation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Frequencies must be finite and strictly positive; temperature finite
//!   and strictly positive; distortion amplitudes finite. Violations are
//!   structured [`SpectrumError`] values, never NaN propagation.
//! - `mu_distortion(ν, 0, T)` and `y_distortion(ν, 0, T)` are exactly zero.
//!
//! Downstream usage
//! ----------------
//! - The likelihood module evaluates these against [`crate::data::MonopoleTable`]
//!   columns; the sampler only ever sees them through a likelihood.

pub mod constants;
pub mod distortions;
pub mod errors;
pub mod planck;
pub mod validation;

pub use self::constants::{BOLTZMANN_K, PLANCK_H, SPEED_OF_LIGHT, T_CMB};
pub use self::distortions::{mu_distortion, y_distortion};
pub use self::errors::{SpectrumError, SpectrumResult};
pub use self::planck::{blackbody, planck_derivative};
