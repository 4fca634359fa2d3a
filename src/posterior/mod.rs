//! posterior — convergence diagnostics and posterior summaries.
//!
//! Purpose
//! -------
//! Turn a raw [`crate::sampler::Chain`] into the quantities the analysis
//! reports: per-dimension integrated autocorrelation times (with a
//! reliability gate), a burn-in/thinning plan derived from them, 16/50/84
//! percentile point estimates with asymmetric intervals, and the
//! χ² = −2·logL goodness-of-fit distribution over the flat samples.
//!
//! Key behaviors
//! -------------
//! - [`autocorr::integrated_autocorr_time`] refuses to return a misleading
//!   number: chains shorter than 50·τ produce a structured error carrying
//!   the estimate, which the caller resolves by extending the run.
//! - The joint chain is thinned by ITS OWN most conservative per-parameter
//!   τ ([`autocorr::thinning_plan`]), never by another chain's estimate.
//! - Summaries operate on the flattened, thinned, burn-in-discarded view
//!   produced by [`crate::sampler::Chain::flatten`]; the chain itself stays
//!   read-only.

pub mod autocorr;
pub mod errors;
pub mod summary;

pub use self::autocorr::{integrated_autocorr_time, thinning_plan, ThinningPlan};
pub use self::errors::{PosteriorError, PosteriorResult};
pub use self::summary::{goodness_of_fit, summarize, ParameterSummary};
