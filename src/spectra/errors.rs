/// Crate-wide result alias for spectral-model operations.
pub type SpectrumResult<T> = Result<T, SpectrumError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// Frequencies must be finite.
    NonFiniteFrequency {
        index: usize,
        value: f64,
    },

    /// Frequencies must be strictly positive.
    NonPositiveFrequency {
        index: usize,
        value: f64,
    },

    /// Temperature must be finite and strictly positive.
    InvalidTemperature {
        value: f64,
        reason: &'static str,
    },

    /// Distortion amplitudes (μ, y) must be finite.
    NonFiniteAmplitude {
        value: f64,
    },
}

impl std::error::Error for SpectrumError {}

impl std::fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpectrumError::NonFiniteFrequency { index, value } => {
                write!(f, "Non-finite frequency at index {index}: {value}")
            }
            SpectrumError::NonPositiveFrequency { index, value } => {
                write!(
                    f,
                    "Invalid frequency at index {index}: {value}, must be strictly positive"
                )
            }
            SpectrumError::InvalidTemperature { value, reason } => {
                write!(f, "Invalid temperature {value}: {reason}")
            }
            SpectrumError::NonFiniteAmplitude { value } => {
                write!(f, "Distortion amplitude must be finite, got {value}")
            }
        }
    }
}
