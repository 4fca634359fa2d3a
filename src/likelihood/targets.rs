//! Sampler-facing targets borrowing a validated observation table.
//!
//! Each target pairs one of the free likelihood functions with a borrowed
//! [`MonopoleTable`], so the per-call data validation the free functions
//! perform cannot fail on the sampling hot path (the table enforced the
//! same invariants at construction). Out-of-domain parameter vectors map to
//! `−∞`, matching the [`LogProbability`] contract.
use crate::data::MonopoleTable;
use crate::likelihood::gaussian::{
    log_likelihood_joint, log_likelihood_mu, log_likelihood_temperature, log_likelihood_y,
};
use crate::sampler::traits::LogProbability;
use ndarray::ArrayView1;

/// Blackbody-temperature fit: θ = [T], monopole column.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureTarget<'a> {
    table: &'a MonopoleTable,
}

impl<'a> TemperatureTarget<'a> {
    pub fn new(table: &'a MonopoleTable) -> Self {
        Self { table }
    }
}

impl LogProbability for TemperatureTarget<'_> {
    fn ndim(&self) -> usize {
        1
    }

    fn log_prob(&self, theta: ArrayView1<'_, f64>) -> f64 {
        if theta.len() != 1 {
            return f64::NEG_INFINITY;
        }
        log_likelihood_temperature(
            theta[0],
            self.table.frequency(),
            self.table.monopole(),
            self.table.sigma(),
        )
        .unwrap_or(f64::NEG_INFINITY)
    }
}

/// Compton-y fit: θ = [y], residual column.
#[derive(Debug, Clone, Copy)]
pub struct YDistortionTarget<'a> {
    table: &'a MonopoleTable,
}

impl<'a> YDistortionTarget<'a> {
    pub fn new(table: &'a MonopoleTable) -> Self {
        Self { table }
    }
}

impl LogProbability for YDistortionTarget<'_> {
    fn ndim(&self) -> usize {
        1
    }

    fn log_prob(&self, theta: ArrayView1<'_, f64>) -> f64 {
        if theta.len() != 1 {
            return f64::NEG_INFINITY;
        }
        log_likelihood_y(
            theta[0],
            self.table.frequency(),
            self.table.residual(),
            self.table.sigma(),
        )
        .unwrap_or(f64::NEG_INFINITY)
    }
}

/// Chemical-potential fit: θ = [μ], residual column.
#[derive(Debug, Clone, Copy)]
pub struct MuDistortionTarget<'a> {
    table: &'a MonopoleTable,
}

impl<'a> MuDistortionTarget<'a> {
    pub fn new(table: &'a MonopoleTable) -> Self {
        Self { table }
    }
}

impl LogProbability for MuDistortionTarget<'_> {
    fn ndim(&self) -> usize {
        1
    }

    fn log_prob(&self, theta: ArrayView1<'_, f64>) -> f64 {
        if theta.len() != 1 {
            return f64::NEG_INFINITY;
        }
        log_likelihood_mu(
            theta[0],
            self.table.frequency(),
            self.table.residual(),
            self.table.sigma(),
        )
        .unwrap_or(f64::NEG_INFINITY)
    }
}

/// Joint fit: θ = [T, y, μ], monopole and residual columns together.
#[derive(Debug, Clone, Copy)]
pub struct JointTarget<'a> {
    table: &'a MonopoleTable,
}

impl<'a> JointTarget<'a> {
    pub fn new(table: &'a MonopoleTable) -> Self {
        Self { table }
    }
}

impl LogProbability for JointTarget<'_> {
    fn ndim(&self) -> usize {
        3
    }

    fn log_prob(&self, theta: ArrayView1<'_, f64>) -> f64 {
        if theta.len() != 3 {
            return f64::NEG_INFINITY;
        }
        log_likelihood_joint(
            theta[0],
            theta[1],
            theta[2],
            self.table.frequency(),
            self.table.monopole(),
            self.table.residual(),
            self.table.sigma(),
        )
        .unwrap_or(f64::NEG_INFINITY)
    }
}
