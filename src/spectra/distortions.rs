//! First-order μ-type and y-type spectral distortions.
//!
//! Both models are linearizations around the reference blackbody: a small
//! amplitude (μ or y) multiplying a fixed spectral shape built from ∂B/∂T.
//! Zero amplitude therefore yields exactly zero correction.
use crate::spectra::{
    constants::{dimensionless_frequency, MU_CROSSOVER_X},
    errors::SpectrumResult,
    planck::planck_derivative_scalar,
    validation::{validate_amplitude, validate_frequencies, validate_temperature},
};
use ndarray::{Array1, ArrayView1};

/// First-order μ-distortion (Bose–Einstein chemical potential).
///
/// Evaluates the photon-number-conserving first-order deviation of a
/// Bose–Einstein spectrum from a pure blackbody:
///
/// `ΔI(ν̃) = μ · (T/x) · (x/x₀ − 1) · ∂B/∂T`,  `x = hcν̃/(kT)`,
///
/// with the crossover at `x₀ =` [`MU_CROSSOVER_X`] (≈ 124 GHz), so a
/// positive μ depresses the low-frequency side and raises the high-frequency
/// side. Output is in MJy/sr.
///
/// Parameters
/// ----------
/// - `frequency`: wavenumbers in cm⁻¹; finite and strictly positive.
/// - `mu`: dimensionless chemical potential; any finite value
///   (physically |μ| ≪ 1).
/// - `temperature`: reference temperature in kelvin; finite and strictly
///   positive.
///
/// Returns
/// -------
/// `SpectrumResult<Array1<f64>>` — the correction, exactly zero everywhere
/// when `mu == 0`.
///
/// Errors
/// ------
/// - `SpectrumError::NonFiniteFrequency` / `NonPositiveFrequency`.
/// - `SpectrumError::InvalidTemperature`.
/// - `SpectrumError::NonFiniteAmplitude`.
pub fn mu_distortion(
    frequency: ArrayView1<'_, f64>, mu: f64, temperature: f64,
) -> SpectrumResult<Array1<f64>> {
    validate_frequencies(frequency)?;
    validate_amplitude(mu)?;
    validate_temperature(temperature)?;
    Ok(frequency.mapv(|nu| {
        let x = dimensionless_frequency(nu, temperature);
        let shape = (temperature / x) * (x / MU_CROSSOVER_X - 1.0);
        mu * shape * planck_derivative_scalar(nu, temperature)
    }))
}

/// First-order Compton-y distortion (thermal Sunyaev–Zel'dovich shape).
///
/// Evaluates
///
/// `ΔI(ν̃) = y · T · (x·(eˣ+1)/(eˣ−1) − 4) · ∂B/∂T`,  `x = hcν̃/(kT)`,
///
/// in MJy/sr. The ratio `(eˣ+1)/(eˣ−1)` is computed from `exp_m1(−x)` so
/// the x → 0 limit of the bracket is the finite value −2 rather than a
/// 0/0 blow-up; the same guard the blackbody itself uses.
///
/// Parameters, returns, and errors mirror [`mu_distortion`], with `y` in
/// place of `mu`. The correction is exactly zero everywhere when `y == 0`.
pub fn y_distortion(
    frequency: ArrayView1<'_, f64>, y: f64, temperature: f64,
) -> SpectrumResult<Array1<f64>> {
    validate_frequencies(frequency)?;
    validate_amplitude(y)?;
    validate_temperature(temperature)?;
    Ok(frequency.mapv(|nu| {
        let x = dimensionless_frequency(nu, temperature);
        // (e^x + 1)/(e^x - 1) == (2 + e) / (-e) with e = exp_m1(-x).
        let e = (-x).exp_m1();
        let coth_like = (2.0 + e) / (-e);
        let bracket = x * coth_like - 4.0;
        y * temperature * bracket * planck_derivative_scalar(nu, temperature)
    }))
}
