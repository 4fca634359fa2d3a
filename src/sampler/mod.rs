//! sampler — seeded affine-invariant ensemble MCMC driver.
//!
//! Purpose
//! -------
//! Draw posterior samples from any [`traits::LogProbability`] target with
//! the Goodman–Weare stretch move: a fixed ensemble of walkers, each
//! proposing along the line to a randomly chosen walker from the
//! complementary half of the ensemble, accepted by a Metropolis criterion
//! weighted by the likelihood ratio.
//!
//! Key behaviors
//! -------------
//! - Every stochastic draw (walker initialization, stretch factors,
//!   complementary-walker choices, acceptance tests) comes from one
//!   `StdRng` seeded from the explicit [`config::SamplerConfig::seed`]:
//!   identical seed, inputs, and iteration count reproduce the chain
//!   bit-for-bit within a build.
//! - Configuration is a validated constructor object; nothing ambient.
//! - Output is a read-only [`chain::Chain`] holding the full
//!   (iteration × walker × dimension) sample array, per-step
//!   log-probabilities, and the acceptance count.
//! - Degenerate likelihoods surface as diagnostics, never silent hangs: a
//!   fully non-finite initial ensemble is a structured error, and a run
//!   that rejected every proposal logs a warning and reports a zero
//!   acceptance rate.
//!
//! Conventions
//! -----------
//! - Independent fits use independent sampler instances; no state is shared
//!   across runs.
//! - The ensemble update is a single-threaded red/black sweep: the first
//!   half of the walkers moves against the frozen second half, then vice
//!   versa. Walker-level parallelism would be a performance optimization,
//!   not a correctness requirement.

pub mod chain;
pub mod config;
pub mod ensemble;
pub mod errors;
pub mod traits;

pub use self::chain::Chain;
pub use self::config::SamplerConfig;
pub use self::ensemble::EnsembleSampler;
pub use self::errors::{SamplerError, SamplerResult};
pub use self::traits::LogProbability;
