use crate::spectra::errors::SpectrumError;

/// Crate-wide result alias for likelihood operations.
pub type LikelihoodResult<T> = Result<T, LikelihoodError>;

#[derive(Debug, Clone, PartialEq)]
pub enum LikelihoodError {
    /// Measurement uncertainties must be finite and strictly positive.
    InvalidSigma {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// A data column's length does not match the frequency array.
    DataLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A data column contains a non-finite entry.
    NonFiniteData {
        column: &'static str,
        index: usize,
        value: f64,
    },

    /// Wrapper for spectral-model domain errors on the data side
    /// (frequency validation).
    Spectrum(SpectrumError),
}

impl std::error::Error for LikelihoodError {}

impl std::fmt::Display for LikelihoodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikelihoodError::InvalidSigma { index, value, reason } => {
                write!(f, "Invalid uncertainty at index {index}: {value}: {reason}")
            }
            LikelihoodError::DataLengthMismatch { column, expected, actual } => {
                write!(
                    f,
                    "Column '{column}' length mismatch: expected {expected}, actual {actual}"
                )
            }
            LikelihoodError::NonFiniteData { column, index, value } => {
                write!(f, "Non-finite value in column '{column}' at index {index}: {value}")
            }
            LikelihoodError::Spectrum(err) => write!(f, "Spectral model error: {err}"),
        }
    }
}

impl From<SpectrumError> for LikelihoodError {
    fn from(err: SpectrumError) -> Self {
        LikelihoodError::Spectrum(err)
    }
}
