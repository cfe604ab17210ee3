//! [`Fixture`]: a dataset together with its indices.
//!
//! This is the single object query operations run against. It is built once
//! and only ever shared by reference afterwards, so concurrent readers need
//! no synchronization.

use tackle_core::{FixtureError, IndexError};

use crate::config::{DatasetConfig, Targets};
use crate::generate::Dataset;
use crate::index::Indices;

/// A generated (or supplied) dataset plus the indices built over it.
#[derive(Clone, Debug)]
pub struct Fixture {
    dataset: Dataset,
    indices: Indices,
}

impl Fixture {
    /// Generate a dataset for `config` and index it.
    pub fn new(config: DatasetConfig) -> Result<Self, IndexError> {
        Self::from_dataset(Dataset::generate(config))
    }

    /// Validate `size`, generate and index.
    pub fn with_size(size: u32) -> Result<Self, FixtureError> {
        let config = DatasetConfig::new(size)?;
        Ok(Self::new(config)?)
    }

    /// Index an existing dataset.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, IndexError> {
        let indices = Indices::build(&dataset)?;
        log::info!(
            "fixture ready: size={}, containers={}, groups={}",
            dataset.config().size(),
            dataset.containers().len(),
            indices.group_count()
        );
        Ok(Self { dataset, indices })
    }

    /// The underlying collections.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The lookup indices.
    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    /// The records the query operations aim at.
    pub fn targets(&self) -> Targets {
        self.dataset.targets()
    }
}
