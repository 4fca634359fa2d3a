//! Gaussian log-likelihood functions for the four fit modes.
//!
//! Normalization decision
//! ----------------------
//! Every likelihood here keeps the full Gaussian log-density, including the
//! `ln(2πσ²)` normalization term. The term is constant in θ and irrelevant
//! for sampling, but the posterior summarizer converts sampled
//! log-likelihoods into the χ² = −2·logL goodness-of-fit statistic, which is
//! only meaningful in absolute terms. Dropping the constant is therefore an
//! error, not an optimization.
use crate::likelihood::errors::{LikelihoodError, LikelihoodResult};
use crate::spectra::{
    blackbody, constants::T_CMB, mu_distortion, validation::validate_frequencies, y_distortion,
};
use ndarray::ArrayView1;
use std::f64::consts::TAU;

/// Gaussian log-likelihood of a blackbody temperature.
///
/// Model: `blackbody(ν, T)` against the monopole column.
///
/// Parameters
/// ----------
/// - `temperature`: candidate T in kelvin. Values outside the model domain
///   (T ≤ 0, NaN, ±∞) yield `Ok(−∞)` so a sampler can reject them.
/// - `frequency`: wavenumbers in cm⁻¹.
/// - `monopole`: measured monopole intensities, MJy/sr.
/// - `sigma`: strictly positive 1-σ uncertainties, MJy/sr.
///
/// Returns
/// -------
/// `LikelihoodResult<f64>` — the summed Gaussian log-density, or `−∞` for
/// out-of-domain parameters.
///
/// Errors
/// ------
/// Data-side violations fail fast:
/// - `LikelihoodError::Spectrum` for invalid frequencies,
/// - `LikelihoodError::DataLengthMismatch` / `NonFiniteData`,
/// - `LikelihoodError::InvalidSigma` for σ ≤ 0 or non-finite σ (undefined
///   probability density).
pub fn log_likelihood_temperature(
    temperature: f64, frequency: ArrayView1<'_, f64>, monopole: ArrayView1<'_, f64>,
    sigma: ArrayView1<'_, f64>,
) -> LikelihoodResult<f64> {
    validate_data(frequency, "monopole", monopole, sigma)?;
    if !(temperature > 0.0 && temperature.is_finite()) {
        return Ok(f64::NEG_INFINITY);
    }
    let model = blackbody(frequency, temperature)?;
    Ok(gaussian_log_density_sum(monopole, model.view(), sigma))
}

/// Gaussian log-likelihood of a Compton-y amplitude.
///
/// Model: `y_distortion(ν, y, T_CMB)` against the residual column. Non-finite
/// `y` yields `Ok(−∞)`; data-side violations fail fast as in
/// [`log_likelihood_temperature`].
pub fn log_likelihood_y(
    y: f64, frequency: ArrayView1<'_, f64>, residual: ArrayView1<'_, f64>,
    sigma: ArrayView1<'_, f64>,
) -> LikelihoodResult<f64> {
    validate_data(frequency, "residual", residual, sigma)?;
    if !y.is_finite() {
        return Ok(f64::NEG_INFINITY);
    }
    let model = y_distortion(frequency, y, T_CMB)?;
    Ok(gaussian_log_density_sum(residual, model.view(), sigma))
}

/// Gaussian log-likelihood of a chemical-potential amplitude μ.
///
/// Model: `mu_distortion(ν, μ, T_CMB)` against the residual column.
/// Non-finite `μ` yields `Ok(−∞)`; data-side violations fail fast as in
/// [`log_likelihood_temperature`].
pub fn log_likelihood_mu(
    mu: f64, frequency: ArrayView1<'_, f64>, residual: ArrayView1<'_, f64>,
    sigma: ArrayView1<'_, f64>,
) -> LikelihoodResult<f64> {
    validate_data(frequency, "residual", residual, sigma)?;
    if !mu.is_finite() {
        return Ok(f64::NEG_INFINITY);
    }
    let model = mu_distortion(frequency, mu, T_CMB)?;
    Ok(gaussian_log_density_sum(residual, model.view(), sigma))
}

/// Joint Gaussian log-likelihood for {T, y, μ}.
///
/// Sum of the three independent log-likelihoods: the blackbody fit against
/// the monopole column plus the two distortion fits against the residual
/// column. Valid because the three models act on additive, independent noise
/// realizations under the linearized-distortion approximation.
///
/// Any single out-of-domain parameter makes the joint value `−∞`.
pub fn log_likelihood_joint(
    temperature: f64, y: f64, mu: f64, frequency: ArrayView1<'_, f64>,
    monopole: ArrayView1<'_, f64>, residual: ArrayView1<'_, f64>, sigma: ArrayView1<'_, f64>,
) -> LikelihoodResult<f64> {
    let t_term = log_likelihood_temperature(temperature, frequency, monopole, sigma)?;
    let y_term = log_likelihood_y(y, frequency, residual, sigma)?;
    let mu_term = log_likelihood_mu(mu, frequency, residual, sigma)?;
    Ok(t_term + y_term + mu_term)
}

/// Summed Gaussian log-density with the normalization term kept.
///
/// Inputs are assumed validated (equal lengths, σ > 0). Non-finite model
/// entries make the whole sum `−∞`, never NaN, so samplers treat the point
/// as zero probability.
pub(crate) fn gaussian_log_density_sum(
    data: ArrayView1<'_, f64>, model: ArrayView1<'_, f64>, sigma: ArrayView1<'_, f64>,
) -> f64 {
    let mut total = 0.0;
    for ((&d, &m), &s) in data.iter().zip(model.iter()).zip(sigma.iter()) {
        if !m.is_finite() {
            return f64::NEG_INFINITY;
        }
        let variance = s * s;
        let residual = d - m;
        total += residual * residual / variance + (TAU * variance).ln();
    }
    -0.5 * total
}

fn validate_data(
    frequency: ArrayView1<'_, f64>, column: &'static str, data: ArrayView1<'_, f64>,
    sigma: ArrayView1<'_, f64>,
) -> LikelihoodResult<()> {
    validate_frequencies(frequency)?;
    let n = frequency.len();
    if data.len() != n {
        return Err(LikelihoodError::DataLengthMismatch {
            column,
            expected: n,
            actual: data.len(),
        });
    }
    if sigma.len() != n {
        return Err(LikelihoodError::DataLengthMismatch {
            column: "sigma",
            expected: n,
            actual: sigma.len(),
        });
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(LikelihoodError::NonFiniteData { column, index, value });
    }
    for (index, &value) in sigma.iter().enumerate() {
        if !value.is_finite() {
            return Err(LikelihoodError::InvalidSigma {
                index,
                value,
                reason: "uncertainty must be finite",
            });
        }
        if value <= 0.0 {
            return Err(LikelihoodError::InvalidSigma {
                index,
                value,
                reason: "uncertainty must be strictly positive",
            });
        }
    }
    Ok(())
}
