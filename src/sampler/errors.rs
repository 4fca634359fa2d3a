/// Crate-wide result alias for sampler operations.
pub type SamplerResult<T> = Result<T, SamplerError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SamplerError {
    // ---- SamplerConfig ----
    /// Walker count must be even and large enough for the stretch move.
    InvalidWalkerCount {
        n_walkers: usize,
        reason: &'static str,
    },

    /// Iteration count must be positive.
    InvalidIterationCount {
        n_iterations: usize,
    },

    /// Stretch scale must be finite and strictly greater than 1.
    InvalidStretchScale {
        value: f64,
        reason: &'static str,
    },

    /// Initial-position spread must be finite and strictly positive.
    InvalidInitialSpread {
        value: f64,
        reason: &'static str,
    },

    // ---- Run ----
    /// Initial guess length does not match the target dimension.
    InitialGuessDimMismatch {
        expected: usize,
        actual: usize,
    },

    /// Initial guess coordinates must be finite.
    NonFiniteInitialGuess {
        index: usize,
        value: f64,
    },

    /// Every walker started at non-finite log-probability; the chain would
    /// stall instead of sampling.
    AllWalkersNonFinite {
        n_walkers: usize,
    },

    // ---- Chain ----
    /// Thinning stride must be at least 1.
    InvalidThin {
        thin: usize,
    },

    /// Burn-in discard must leave at least one iteration.
    DiscardExceedsChain {
        discard: usize,
        n_iterations: usize,
    },
}

impl std::error::Error for SamplerError {}

impl std::fmt::Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplerError::InvalidWalkerCount { n_walkers, reason } => {
                write!(f, "Invalid walker count {n_walkers}: {reason}")
            }
            SamplerError::InvalidIterationCount { n_iterations } => {
                write!(f, "Invalid iteration count {n_iterations}: must be greater than zero")
            }
            SamplerError::InvalidStretchScale { value, reason } => {
                write!(f, "Invalid stretch scale {value}: {reason}")
            }
            SamplerError::InvalidInitialSpread { value, reason } => {
                write!(f, "Invalid initial-position spread {value}: {reason}")
            }
            SamplerError::InitialGuessDimMismatch { expected, actual } => {
                write!(f, "Initial guess dimension mismatch: expected {expected}, actual {actual}")
            }
            SamplerError::NonFiniteInitialGuess { index, value } => {
                write!(f, "Non-finite initial guess at index {index}: {value}")
            }
            SamplerError::AllWalkersNonFinite { n_walkers } => {
                write!(
                    f,
                    "All {n_walkers} walkers started at non-finite log-probability; \
                     the likelihood is degenerate at the initial position"
                )
            }
            SamplerError::InvalidThin { thin } => {
                write!(f, "Invalid thinning stride {thin}: must be at least 1")
            }
            SamplerError::DiscardExceedsChain { discard, n_iterations } => {
                write!(
                    f,
                    "Burn-in discard {discard} leaves no samples in a chain of {n_iterations} iterations"
                )
            }
        }
    }
}
