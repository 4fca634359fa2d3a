//! Planck blackbody law and its analytic temperature derivative.
use crate::spectra::{
    constants::{dimensionless_frequency, CGS_TO_MJY_PER_SR, PLANCK_H, SPEED_OF_LIGHT},
    errors::SpectrumResult,
    validation::{validate_frequencies, validate_temperature},
};
use ndarray::{Array1, ArrayView1};

/// Planck blackbody specific intensity.
///
/// Evaluates `B(ν̃, T) = 2hcν̃³ / (exp(x) − 1)` with `x = hcν̃/(kT)`, scaled
/// to MJy/sr. The denominator uses `exp_m1` so the low-frequency limit
/// degrades gracefully into the Rayleigh–Jeans form `2kTν̃²` instead of
/// suffering catastrophic cancellation.
///
/// Parameters
/// ----------
/// - `frequency`: wavenumbers in cm⁻¹; finite and strictly positive.
/// - `temperature`: kelvin; finite and strictly positive.
///
/// Returns
/// -------
/// `SpectrumResult<Array1<f64>>`
///   - `Ok(intensity)` in MJy/sr, same shape as `frequency`, all entries
///     non-negative.
///   - `Err(SpectrumError)` if an input violates the model domain.
///
/// Errors
/// ------
/// - `SpectrumError::NonFiniteFrequency` / `NonPositiveFrequency`.
/// - `SpectrumError::InvalidTemperature`.
///
/// Panics
/// ------
/// - Never panics.
pub fn blackbody(
    frequency: ArrayView1<'_, f64>, temperature: f64,
) -> SpectrumResult<Array1<f64>> {
    validate_frequencies(frequency)?;
    validate_temperature(temperature)?;
    Ok(frequency.mapv(|nu| blackbody_scalar(nu, temperature)))
}

/// Analytic ∂B/∂T at fixed frequency.
///
/// Evaluates `∂B/∂T = 2hcν̃³ · (x/T) · eˣ/(eˣ − 1)²` in MJy/sr/K. The
/// exponential ratio is computed as `e⁻ˣ/(1 − e⁻ˣ)²` via `exp_m1(−x)`,
/// which is stable for small x and cannot overflow for large x.
///
/// Used as the basis function for the linearized μ- and y-distortion
/// models, conventionally evaluated at the reference temperature
/// [`crate::spectra::constants::T_CMB`].
///
/// Parameters, errors, and panics as for [`blackbody`].
pub fn planck_derivative(
    frequency: ArrayView1<'_, f64>, temperature: f64,
) -> SpectrumResult<Array1<f64>> {
    validate_frequencies(frequency)?;
    validate_temperature(temperature)?;
    Ok(frequency.mapv(|nu| planck_derivative_scalar(nu, temperature)))
}

/// Scalar Planck kernel; caller guarantees `nu > 0` and `temperature > 0`.
#[inline]
pub(crate) fn blackbody_scalar(nu: f64, temperature: f64) -> f64 {
    let x = dimensionless_frequency(nu, temperature);
    let prefactor = 2.0 * PLANCK_H * SPEED_OF_LIGHT * nu.powi(3) * CGS_TO_MJY_PER_SR;
    prefactor / x.exp_m1()
}

/// Scalar ∂B/∂T kernel; caller guarantees `nu > 0` and `temperature > 0`.
#[inline]
pub(crate) fn planck_derivative_scalar(nu: f64, temperature: f64) -> f64 {
    let x = dimensionless_frequency(nu, temperature);
    // e^x / (e^x - 1)^2 == e^{-x} / (1 - e^{-x})^2, overflow-free for large x.
    let one_minus_exp_neg = -(-x).exp_m1();
    let ratio = (-x).exp() / (one_minus_exp_neg * one_minus_exp_neg);
    let prefactor = 2.0 * PLANCK_H * SPEED_OF_LIGHT * nu.powi(3) * CGS_TO_MJY_PER_SR;
    prefactor * (x / temperature) * ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectra::constants::{BOLTZMANN_K, T_CMB};
    use crate::spectra::errors::SpectrumError;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The Rayleigh-Jeans low-frequency limit of `blackbody`.
    // - Monotonicity in T (all frequencies) and in frequency (below and above
    //   the Wien peak).
    // - Agreement of `planck_derivative` with a central finite difference.
    // - A pinned absolute intensity near the CMB spectral peak.
    // - Domain rejection of invalid frequency / temperature inputs.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // For x ≪ 1 the Planck law must approach the Rayleigh-Jeans form
    // 2kTν̃² (in MJy/sr) instead of diverging or producing NaN.
    //
    // Given
    // -----
    // - Wavenumbers deep in the RJ regime (x ≤ ~5e-7), where the leading
    //   truncation error of the approximation, x/2, is below the assertion
    //   tolerance.
    //
    // Expect
    // ------
    // - Finite values matching 2kTν̃² to 1e-6 relative.
    fn blackbody_reaches_rayleigh_jeans_limit() {
        let nu = array![1.0e-8, 1.0e-7, 1.0e-6];

        let b = blackbody(nu.view(), T_CMB).unwrap();

        for (i, &nu_i) in nu.iter().enumerate() {
            let rayleigh_jeans =
                2.0 * BOLTZMANN_K * T_CMB * nu_i * nu_i * super::CGS_TO_MJY_PER_SR;
            assert!(b[i].is_finite());
            assert_relative_eq!(b[i], rayleigh_jeans, max_relative = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // `blackbody` is strictly increasing in T for fixed ν̃ > 0.
    //
    // Given
    // -----
    // - Temperatures 2.0 < 2.725 < 3.5 K across the FIRAS band.
    //
    // Expect
    // ------
    // - Elementwise strict ordering of the three spectra.
    fn blackbody_is_strictly_increasing_in_temperature() {
        let nu = Array1::linspace(0.5, 21.0, 42);

        let cold = blackbody(nu.view(), 2.0).unwrap();
        let reference = blackbody(nu.view(), 2.725).unwrap();
        let warm = blackbody(nu.view(), 3.5).unwrap();

        for i in 0..nu.len() {
            assert!(cold[i] < reference[i]);
            assert!(reference[i] < warm[i]);
        }
    }

    #[test]
    // Purpose
    // -------
    // At fixed T the spectrum rises with frequency up to the Wien peak
    // (x ≈ 2.82, ν̃ ≈ 5.3 cm⁻¹ at T_CMB) and falls beyond it.
    //
    // Given
    // -----
    // - A grid below the peak (0.2..4.5 cm⁻¹) and one above it (6..20 cm⁻¹).
    //
    // Expect
    // ------
    // - Strictly increasing values below, strictly decreasing above.
    fn blackbody_is_monotonic_around_wien_peak() {
        let below = Array1::linspace(0.2, 4.5, 30);
        let above = Array1::linspace(6.0, 20.0, 30);

        let rising = blackbody(below.view(), T_CMB).unwrap();
        let falling = blackbody(above.view(), T_CMB).unwrap();

        for i in 1..rising.len() {
            assert!(rising[i] > rising[i - 1]);
        }
        for i in 1..falling.len() {
            assert!(falling[i] < falling[i - 1]);
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin the absolute scale: near the peak of a 2.725 K blackbody the
    // intensity is ~383 MJy/sr (the FIRAS monopole maximum).
    fn blackbody_matches_firas_peak_scale() {
        let nu = array![5.45];

        let b = blackbody(nu.view(), T_CMB).unwrap();

        assert_relative_eq!(b[0], 383.4, max_relative = 2e-3);
    }

    #[test]
    // Purpose
    // -------
    // The analytic derivative must agree with a central finite difference
    // of `blackbody` across the band.
    //
    // Given
    // -----
    // - Step h = 1e-6 K around T_CMB.
    //
    // Expect
    // ------
    // - Agreement to 1e-5 relative at every frequency.
    fn planck_derivative_matches_finite_difference() {
        let nu = Array1::linspace(0.5, 21.0, 22);
        let h = 1.0e-6;

        let analytic = planck_derivative(nu.view(), T_CMB).unwrap();
        let upper = blackbody(nu.view(), T_CMB + h).unwrap();
        let lower = blackbody(nu.view(), T_CMB - h).unwrap();

        for i in 0..nu.len() {
            let numeric = (upper[i] - lower[i]) / (2.0 * h);
            assert_relative_eq!(analytic[i], numeric, max_relative = 1e-5);
        }
    }

    #[test]
    // Purpose
    // -------
    // Domain violations are structured errors, not NaN outputs.
    fn blackbody_rejects_invalid_inputs() {
        let nu = array![1.0, 2.0];
        let bad_nu = array![1.0, 0.0];

        assert!(matches!(
            blackbody(bad_nu.view(), T_CMB),
            Err(SpectrumError::NonPositiveFrequency { index: 1, .. })
        ));
        assert!(matches!(
            blackbody(nu.view(), -1.0),
            Err(SpectrumError::InvalidTemperature { .. })
        ));
        assert!(matches!(
            planck_derivative(nu.view(), f64::NAN),
            Err(SpectrumError::InvalidTemperature { .. })
        ));
    }
}
