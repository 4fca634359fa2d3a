/// Crate-wide result alias for observation-table operations.
pub type DataResult<T> = Result<T, DataError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// The table has no rows.
    EmptyTable,

    /// A column's length does not match the frequency column.
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A column contains a NaN or ±∞ entry.
    NonFiniteValue {
        column: &'static str,
        index: usize,
        value: f64,
    },

    /// Frequencies must be strictly positive.
    NonPositiveFrequency {
        index: usize,
        value: f64,
    },

    /// Frequencies must be strictly increasing.
    NonIncreasingFrequency {
        index: usize,
        previous: f64,
        value: f64,
    },

    /// Measurement uncertainties must be strictly positive.
    NonPositiveSigma {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::EmptyTable => {
                write!(f, "Observation table must contain at least one row")
            }
            DataError::ColumnLengthMismatch { column, expected, actual } => {
                write!(
                    f,
                    "Column '{column}' length mismatch: expected {expected}, actual {actual}"
                )
            }
            DataError::NonFiniteValue { column, index, value } => {
                write!(f, "Non-finite value in column '{column}' at index {index}: {value}")
            }
            DataError::NonPositiveFrequency { index, value } => {
                write!(
                    f,
                    "Invalid frequency at index {index}: {value}, must be strictly positive"
                )
            }
            DataError::NonIncreasingFrequency { index, previous, value } => {
                write!(
                    f,
                    "Frequencies must be strictly increasing: index {index} has {value} after {previous}"
                )
            }
            DataError::NonPositiveSigma { index, value } => {
                write!(
                    f,
                    "Invalid uncertainty at index {index}: {value}, must be strictly positive"
                )
            }
        }
    }
}
