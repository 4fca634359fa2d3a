//! Validated container for the CMB monopole spectrum table.
use crate::data::errors::{DataError, DataResult};
use ndarray::{Array1, ArrayView1};

/// `MonopoleTable` — validated FIRAS-style monopole spectrum.
///
/// Purpose
/// -------
/// Hold the five observation columns the fits consume: frequency, monopole
/// intensity, residual intensity (monopole minus a fixed reference
/// blackbody), per-point measurement uncertainty, and a galactic-foreground
/// model value. All invariants are enforced once, at construction, so
/// likelihood code can assume clean inputs on its hot path.
///
/// Fields
/// ------
/// - `frequency`: wavenumbers in cm⁻¹; finite, strictly positive, strictly
///   increasing.
/// - `monopole`: measured monopole intensity in MJy/sr; finite.
/// - `residual`: monopole minus the reference blackbody, MJy/sr; finite.
/// - `sigma`: 1-σ measurement uncertainty, MJy/sr; finite and strictly
///   positive.
/// - `galaxy`: galactic-foreground model value, MJy/sr; finite.
///
/// Invariants
/// ----------
/// - All columns share the same non-zero length.
/// - The table is immutable after construction; accessors return views.
#[derive(Debug, Clone, PartialEq)]
pub struct MonopoleTable {
    frequency: Array1<f64>,
    monopole: Array1<f64>,
    residual: Array1<f64>,
    sigma: Array1<f64>,
    galaxy: Array1<f64>,
}

impl MonopoleTable {
    /// Construct a validated [`MonopoleTable`] from raw columns.
    ///
    /// Parameters
    /// ----------
    /// - `frequency`: wavenumbers in cm⁻¹, strictly positive and strictly
    ///   increasing.
    /// - `monopole`, `residual`, `galaxy`: intensity columns in MJy/sr.
    /// - `sigma`: strictly positive 1-σ uncertainties in MJy/sr.
    ///
    /// Returns
    /// -------
    /// `DataResult<MonopoleTable>`
    ///   - `Ok(table)` if all invariants hold.
    ///   - `Err(DataError)` describing the first violation encountered.
    ///
    /// Errors
    /// ------
    /// - `DataError::EmptyTable` if `frequency` is empty.
    /// - `DataError::ColumnLengthMismatch` if any column's length differs
    ///   from `frequency.len()`.
    /// - `DataError::NonFiniteValue` for any NaN or ±∞ entry, reporting the
    ///   column name and index.
    /// - `DataError::NonPositiveFrequency` / `DataError::NonIncreasingFrequency`
    ///   for frequency-ordering violations.
    /// - `DataError::NonPositiveSigma` for σ ≤ 0.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `DataError`.
    pub fn new(
        frequency: Array1<f64>, monopole: Array1<f64>, residual: Array1<f64>,
        sigma: Array1<f64>, galaxy: Array1<f64>,
    ) -> DataResult<Self> {
        let n = frequency.len();
        if n == 0 {
            return Err(DataError::EmptyTable);
        }
        for (column, values) in [
            ("monopole", &monopole),
            ("residual", &residual),
            ("sigma", &sigma),
            ("galaxy", &galaxy),
        ] {
            if values.len() != n {
                return Err(DataError::ColumnLengthMismatch {
                    column,
                    expected: n,
                    actual: values.len(),
                });
            }
        }

        validate_finite("frequency", frequency.view())?;
        validate_finite("monopole", monopole.view())?;
        validate_finite("residual", residual.view())?;
        validate_finite("sigma", sigma.view())?;
        validate_finite("galaxy", galaxy.view())?;

        let mut previous = f64::NEG_INFINITY;
        for (index, &value) in frequency.iter().enumerate() {
            if value <= 0.0 {
                return Err(DataError::NonPositiveFrequency { index, value });
            }
            if value <= previous {
                return Err(DataError::NonIncreasingFrequency { index, previous, value });
            }
            previous = value;
        }

        if let Some((index, &value)) = sigma.iter().enumerate().find(|(_, v)| **v <= 0.0) {
            return Err(DataError::NonPositiveSigma { index, value });
        }

        Ok(MonopoleTable { frequency, monopole, residual, sigma, galaxy })
    }

    /// Number of observation rows.
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Frequency column (cm⁻¹), strictly increasing.
    pub fn frequency(&self) -> ArrayView1<'_, f64> {
        self.frequency.view()
    }

    /// Monopole intensity column (MJy/sr).
    pub fn monopole(&self) -> ArrayView1<'_, f64> {
        self.monopole.view()
    }

    /// Residual intensity column (MJy/sr).
    pub fn residual(&self) -> ArrayView1<'_, f64> {
        self.residual.view()
    }

    /// 1-σ uncertainty column (MJy/sr), strictly positive.
    pub fn sigma(&self) -> ArrayView1<'_, f64> {
        self.sigma.view()
    }

    /// Galactic-foreground model column (MJy/sr).
    pub fn galaxy(&self) -> ArrayView1<'_, f64> {
        self.galaxy.view()
    }
}

fn validate_finite(column: &'static str, values: ArrayView1<'_, f64>) -> DataResult<()> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DataError::NonFiniteValue { column, index, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `MonopoleTable::new`.
    // - Enforcement of invariants:
    //   * non-empty table,
    //   * matching column lengths,
    //   * finite values in every column,
    //   * strictly positive, strictly increasing frequencies,
    //   * strictly positive uncertainties.
    //
    // They intentionally DO NOT cover:
    // - Likelihood evaluation against the table (likelihood module tests).
    // -------------------------------------------------------------------------

    fn make_columns() -> (Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>) {
        (
            array![2.27, 2.72, 3.18],
            array![200.7, 249.5, 293.0],
            array![0.005, 0.009, 0.015],
            array![0.014, 0.019, 0.025],
            array![0.004, 0.003, -0.001],
        )
    }

    #[test]
    // Purpose
    // -------
    // `MonopoleTable::new` succeeds on valid columns and preserves them.
    //
    // Given
    // -----
    // - Three rows of finite values, increasing positive frequencies,
    //   positive sigmas.
    //
    // Expect
    // ------
    // - `Ok(table)` with every accessor returning the input column.
    fn new_returns_ok_for_valid_columns() {
        let (nu, monopole, residual, sigma, galaxy) = make_columns();

        let table = MonopoleTable::new(
            nu.clone(),
            monopole.clone(),
            residual.clone(),
            sigma.clone(),
            galaxy.clone(),
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.frequency(), nu.view());
        assert_eq!(table.monopole(), monopole.view());
        assert_eq!(table.residual(), residual.view());
        assert_eq!(table.sigma(), sigma.view());
        assert_eq!(table.galaxy(), galaxy.view());
    }

    #[test]
    // Purpose
    // -------
    // An empty frequency column is rejected.
    //
    // Expect
    // ------
    // - `Err(DataError::EmptyTable)`.
    fn new_rejects_empty_table() {
        let empty = Array1::<f64>::zeros(0);

        let result = MonopoleTable::new(
            empty.clone(),
            empty.clone(),
            empty.clone(),
            empty.clone(),
            empty,
        );

        assert_eq!(result.unwrap_err(), DataError::EmptyTable);
    }

    #[test]
    // Purpose
    // -------
    // A column whose length differs from the frequency column is rejected
    // and named in the error.
    //
    // Given
    // -----
    // - `sigma` shortened to two entries against three frequencies.
    //
    // Expect
    // ------
    // - `Err(DataError::ColumnLengthMismatch { column: "sigma", .. })`.
    fn new_rejects_column_length_mismatch() {
        let (nu, monopole, residual, _, galaxy) = make_columns();
        let sigma = array![0.014, 0.019];

        let result = MonopoleTable::new(nu, monopole, residual, sigma, galaxy);

        assert_eq!(
            result.unwrap_err(),
            DataError::ColumnLengthMismatch { column: "sigma", expected: 3, actual: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Non-finite entries are rejected with the column name and index.
    //
    // Given
    // -----
    // - A NaN planted in the monopole column at index 1.
    //
    // Expect
    // ------
    // - `Err(DataError::NonFiniteValue { column: "monopole", index: 1, .. })`.
    fn new_rejects_non_finite_values() {
        let (nu, _, residual, sigma, galaxy) = make_columns();
        let monopole = array![200.7, f64::NAN, 293.0];

        let result = MonopoleTable::new(nu, monopole, residual, sigma, galaxy);

        match result {
            Err(DataError::NonFiniteValue { column, index, value }) => {
                assert_eq!(column, "monopole");
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteValue error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Non-positive frequencies are rejected.
    //
    // Expect
    // ------
    // - `Err(DataError::NonPositiveFrequency { index: 0, value: 0.0 })`.
    fn new_rejects_non_positive_frequency() {
        let (_, monopole, residual, sigma, galaxy) = make_columns();
        let nu = array![0.0, 2.72, 3.18];

        let result = MonopoleTable::new(nu, monopole, residual, sigma, galaxy);

        assert_eq!(
            result.unwrap_err(),
            DataError::NonPositiveFrequency { index: 0, value: 0.0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Frequencies that fail to increase strictly are rejected, reporting the
    // offending index and its predecessor.
    //
    // Given
    // -----
    // - A repeated frequency value at index 2.
    //
    // Expect
    // ------
    // - `Err(DataError::NonIncreasingFrequency { index: 2, .. })`.
    fn new_rejects_non_increasing_frequency() {
        let (_, monopole, residual, sigma, galaxy) = make_columns();
        let nu = array![2.27, 2.72, 2.72];

        let result = MonopoleTable::new(nu, monopole, residual, sigma, galaxy);

        assert_eq!(
            result.unwrap_err(),
            DataError::NonIncreasingFrequency { index: 2, previous: 2.72, value: 2.72 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Non-positive uncertainties are rejected with the offending index.
    //
    // Expect
    // ------
    // - `Err(DataError::NonPositiveSigma { index: 1, value: -0.019 })`.
    fn new_rejects_non_positive_sigma() {
        let (nu, monopole, residual, _, galaxy) = make_columns();
        let sigma = array![0.014, -0.019, 0.025];

        let result = MonopoleTable::new(nu, monopole, residual, sigma, galaxy);

        assert_eq!(
            result.unwrap_err(),
            DataError::NonPositiveSigma { index: 1, value: -0.019 }
        );
    }
}
