/// Crate-wide result alias for posterior-summary operations.
pub type PosteriorResult<T> = Result<T, PosteriorError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PosteriorError {
    /// The chain is too short for a trustworthy autocorrelation estimate;
    /// extend the run and resample. Carries the tentative τ so the caller
    /// can size the extension.
    ChainTooShort {
        dimension: usize,
        tau: f64,
        n_iterations: usize,
        required: usize,
    },

    /// A parameter dimension never moved; its autocorrelation time is
    /// undefined.
    ZeroVarianceChain {
        dimension: usize,
    },

    /// No samples to summarize.
    EmptySamples,

    /// Flat-sample dimension does not match the target.
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },
}

impl std::error::Error for PosteriorError {}

impl std::fmt::Display for PosteriorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosteriorError::ChainTooShort { dimension, tau, n_iterations, required } => {
                write!(
                    f,
                    "Chain too short for a reliable autocorrelation time in dimension \
                     {dimension}: estimated tau = {tau:.1} needs at least {required} \
                     iterations, got {n_iterations}; extend the run"
                )
            }
            PosteriorError::ZeroVarianceChain { dimension } => {
                write!(
                    f,
                    "Chain has zero variance in dimension {dimension}; autocorrelation \
                     time is undefined"
                )
            }
            PosteriorError::EmptySamples => {
                write!(f, "No samples to summarize")
            }
            PosteriorError::DimensionMismatch { expected, actual } => {
                write!(f, "Sample dimension mismatch: expected {expected}, actual {actual}")
            }
        }
    }
}
