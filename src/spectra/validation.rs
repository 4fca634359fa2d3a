//! Boundary checks shared by the spectral model functions.
//!
//! Invalid physical inputs are rejected here, at the model boundary, rather
//! than left to surface later as NaN in a likelihood. Validation reports the
//! first offending element and never panics.
use crate::spectra::errors::{SpectrumError, SpectrumResult};
use ndarray::ArrayView1;

/// Validate a frequency array: every entry finite and strictly positive.
///
/// Errors
/// ------
/// - `SpectrumError::NonFiniteFrequency` for NaN or ±∞ entries.
/// - `SpectrumError::NonPositiveFrequency` for entries ≤ 0.
pub fn validate_frequencies(frequency: ArrayView1<'_, f64>) -> SpectrumResult<()> {
    for (index, &value) in frequency.iter().enumerate() {
        if !value.is_finite() {
            return Err(SpectrumError::NonFiniteFrequency { index, value });
        }
        if value <= 0.0 {
            return Err(SpectrumError::NonPositiveFrequency { index, value });
        }
    }
    Ok(())
}

/// Validate a temperature: finite and strictly positive.
///
/// Errors
/// ------
/// - `SpectrumError::InvalidTemperature` with a reason naming whether
///   finiteness or positivity failed.
pub fn validate_temperature(temperature: f64) -> SpectrumResult<()> {
    if !temperature.is_finite() {
        return Err(SpectrumError::InvalidTemperature {
            value: temperature,
            reason: "temperature must be finite",
        });
    }
    if temperature <= 0.0 {
        return Err(SpectrumError::InvalidTemperature {
            value: temperature,
            reason: "temperature must be strictly positive",
        });
    }
    Ok(())
}

/// Validate a distortion amplitude (μ or y): finite.
///
/// Amplitudes carry no sign or magnitude restriction (physically |μ|, |y| ≪ 1,
/// but the models are defined for any finite value).
///
/// Errors
/// ------
/// - `SpectrumError::NonFiniteAmplitude` for NaN or ±∞.
pub fn validate_amplitude(amplitude: f64) -> SpectrumResult<()> {
    if !amplitude.is_finite() {
        return Err(SpectrumError::NonFiniteAmplitude { value: amplitude });
    }
    Ok(())
}
