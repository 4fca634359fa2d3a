//! Point estimates with asymmetric intervals and the χ² goodness of fit.
use crate::posterior::errors::{PosteriorError, PosteriorResult};
use crate::sampler::traits::LogProbability;
use ndarray::{Array1, ArrayView2};
use statrs::statistics::{Data, OrderStatistics};

/// A 16/50/84-percentile summary of one marginal posterior.
///
/// The point estimate is the median; `minus` and `plus` are the distances
/// to the 16th and 84th percentiles, so the report reads
/// `median − minus / + plus` (a 68% credible interval, asymmetric when the
/// marginal is skewed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSummary {
    pub median: f64,
    pub minus: f64,
    pub plus: f64,
}

impl std::fmt::Display for ParameterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} -{:.6}/+{:.6}", self.median, self.minus, self.plus)
    }
}

/// Summarize each column of a flat sample matrix by its 16/50/84
/// percentiles.
///
/// Parameters
/// ----------
/// - `flat_samples`: `(n_samples, n_dim)` matrix, normally the output of
///   [`crate::sampler::Chain::flatten`].
///
/// Errors
/// ------
/// - `PosteriorError::EmptySamples` when the matrix has no rows.
pub fn summarize(flat_samples: ArrayView2<'_, f64>) -> PosteriorResult<Vec<ParameterSummary>> {
    if flat_samples.nrows() == 0 {
        return Err(PosteriorError::EmptySamples);
    }

    let mut summaries = Vec::with_capacity(flat_samples.ncols());
    for column in flat_samples.columns() {
        let mut data = Data::new(column.to_vec());
        let lower = data.percentile(16);
        let median = data.percentile(50);
        let upper = data.percentile(84);
        summaries.push(ParameterSummary {
            median,
            minus: median - lower,
            plus: upper - median,
        });
    }
    Ok(summaries)
}

/// Evaluate χ² = −2·log p over every flat sample.
///
/// Because the Gaussian log-likelihood keeps its normalization constant,
/// the returned values are offset from the raw sum of squared residuals by
/// `Σ ln(2π·σᵢ²)`; comparisons across models on the same data are
/// unaffected.
///
/// Errors
/// ------
/// - `PosteriorError::EmptySamples` when the matrix has no rows.
/// - `PosteriorError::DimensionMismatch` when the sample dimension differs
///   from the target's.
pub fn goodness_of_fit<T: LogProbability>(
    flat_samples: ArrayView2<'_, f64>,
    target: &T,
) -> PosteriorResult<Array1<f64>> {
    if flat_samples.nrows() == 0 {
        return Err(PosteriorError::EmptySamples);
    }
    if flat_samples.ncols() != target.ndim() {
        return Err(PosteriorError::DimensionMismatch {
            expected: target.ndim(),
            actual: flat_samples.ncols(),
        });
    }

    let mut chi_square = Array1::zeros(flat_samples.nrows());
    for (row, out) in flat_samples.rows().into_iter().zip(chi_square.iter_mut()) {
        *out = -2.0 * target.log_prob(row);
    }
    Ok(chi_square)
}
