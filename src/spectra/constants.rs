//! Physical constants (CGS, 2019 SI exact values) and unit conversions.

/// Planck constant h in erg·s.
pub const PLANCK_H: f64 = 6.626_070_15e-27;

/// Boltzmann constant k in erg/K.
pub const BOLTZMANN_K: f64 = 1.380_649e-16;

/// Speed of light c in cm/s.
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e10;

/// FIRAS reference temperature of the CMB monopole, in kelvin.
pub const T_CMB: f64 = 2.725;

/// Conversion from erg·s⁻¹·cm⁻²·sr⁻¹·Hz⁻¹ to MJy/sr.
///
/// 1 Jy = 10⁻²³ erg·s⁻¹·cm⁻²·Hz⁻¹, so the CGS specific intensity scales by
/// 10²³ to Jy/sr and by a further 10⁻⁶ to MJy/sr.
pub const CGS_TO_MJY_PER_SR: f64 = 1.0e17;

/// Zero crossing x₀ of the μ-distortion spectral shape.
///
/// The photon-number-conserving first-order Bose–Einstein deviation changes
/// sign at x = hcν̃/(kT) ≈ 2.1923 (ν ≈ 124 GHz for T = T_CMB).
pub const MU_CROSSOVER_X: f64 = 2.1923;

/// Dimensionless frequency x = hcν̃ / (kT).
///
/// `frequency` is a wavenumber in cm⁻¹ and `temperature` is in kelvin; the
/// caller is responsible for both being strictly positive.
#[inline]
pub fn dimensionless_frequency(frequency: f64, temperature: f64) -> f64 {
    PLANCK_H * SPEED_OF_LIGHT * frequency / (BOLTZMANN_K * temperature)
}
