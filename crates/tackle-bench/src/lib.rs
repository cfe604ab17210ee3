//! Benchmark profiles and utilities for the Tackle lookup suite.
//!
//! Provides pre-built [`Fixture`] profiles for benchmarks and examples:
//!
//! - [`reference_fixture`]: N=999, the size the suite was designed around
//! - [`stress_fixture`]: N=9,999 for the sub-quadratic queries
//! - [`boundary_fixture`]: N=3, the smallest valid dataset
//! - [`SCALING_SIZES`]: sizes swept by the scaling benchmark
//!
//! The [`report`] module times queries without Criterion, for the
//! `lookup_report` example.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod report;

use tackle_core::FixtureError;
use tackle_dataset::{DatasetConfig, Fixture};

/// Size of the reference profile.
pub const REFERENCE_SIZE: u32 = DatasetConfig::DEFAULT_SIZE;

/// Size of the stress profile.
pub const STRESS_SIZE: u32 = 9_999;

/// Dataset sizes for the scaling sweep, each a multiple of 3.
pub const SCALING_SIZES: [u32; 4] = [99, 999, 3_000, 9_999];

/// Build the reference profile: 999 subjects, 333 containers.
pub fn reference_fixture() -> Result<Fixture, FixtureError> {
    Fixture::with_size(REFERENCE_SIZE)
}

/// Build the stress profile: 9,999 subjects, 3,333 containers.
///
/// The cubic query takes minutes per call at this size; benches skip it.
pub fn stress_fixture() -> Result<Fixture, FixtureError> {
    Fixture::with_size(STRESS_SIZE)
}

/// Build the smallest valid profile: one container, one group of three.
pub fn boundary_fixture() -> Result<Fixture, FixtureError> {
    Fixture::with_size(DatasetConfig::MIN_SIZE)
}

/// Build one fixture per entry of [`SCALING_SIZES`].
pub fn scaling_fixtures() -> Result<Vec<(u32, Fixture)>, FixtureError> {
    SCALING_SIZES
        .iter()
        .map(|&size| Ok((size, Fixture::with_size(size)?)))
        .collect()
}
