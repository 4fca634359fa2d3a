//! Observation-table containers for the CMB monopole spectrum.
//!
//! Purpose
//! -------
//! Provide the validated, immutable data container consumed by every
//! likelihood in this crate. The five FIRAS-style columns (frequency,
//! monopole intensity, residual intensity, uncertainty, galactic-model
//! value) enter the crate exactly once, through [`MonopoleTable::new`],
//! which enforces all documented invariants so downstream code never
//! re-validates basic properties.
//!
//! Key behaviors
//! -------------
//! - [`MonopoleTable`] rejects empty tables, column-length mismatches,
//!   non-finite values, non-positive or non-increasing frequencies, and
//!   non-positive uncertainties at construction time.
//! - After construction the table is read-only; accessors hand out
//!   `ndarray` views.
//!
//! Conventions
//! -----------
//! - Frequencies are wavenumbers in cm⁻¹; all intensity columns share one
//!   unit (MJy/sr) so model predictions compare against them directly.
//! - Data acquisition (download, text parsing, unit conversion) is an
//!   external collaborator's job; this module only accepts numeric columns.

pub mod errors;
pub mod table;

pub use self::errors::{DataError, DataResult};
pub use self::table::MonopoleTable;
