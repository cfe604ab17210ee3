//! Dataset builders and mock queries for Tackle development.
//!
//! [`DatasetBuilder`] starts from a generated dataset and breaks it in
//! targeted ways, so tests can reach the index builder's and the queries'
//! error paths. The [`fixtures`] module holds mock [`LookupQuery`]
//! implementations for exercising [`QuerySuite`].
//!
//! [`LookupQuery`]: tackle_query::LookupQuery
//! [`QuerySuite`]: tackle_query::QuerySuite

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ConstQuery, FailingQuery};

use tackle_core::{Container, ContainerNumber, Event, Subject, TrackingId};
use tackle_dataset::{Dataset, DatasetConfig, Fixture};

/// Build a fixture for `size`, panicking on invalid input.
pub fn fixture(size: u32) -> Fixture {
    Fixture::with_size(size).expect("test fixture size must be a positive multiple of 3")
}

/// Edits a generated dataset before handing it to code under test.
pub struct DatasetBuilder {
    config: DatasetConfig,
    subjects: Vec<Subject>,
    containers: Vec<Container>,
    events: Vec<Event>,
}

impl DatasetBuilder {
    /// Start from the generated dataset for `size`.
    pub fn new(size: u32) -> Self {
        let config =
            DatasetConfig::new(size).expect("builder size must be a positive multiple of 3");
        let dataset = Dataset::generate(config);
        Self {
            config,
            subjects: dataset.subjects().to_vec(),
            containers: dataset.containers().to_vec(),
            events: dataset.events().to_vec(),
        }
    }

    /// Append a second copy of subject `id`.
    pub fn duplicate_subject(mut self, id: u32) -> Self {
        let copy = *self
            .subjects
            .iter()
            .find(|s| s.tracking_id == TrackingId(id))
            .expect("subject to duplicate must exist");
        self.subjects.push(copy);
        self
    }

    /// Append a second copy of container `number`.
    pub fn duplicate_container(mut self, number: u32) -> Self {
        let copy = *self
            .containers
            .iter()
            .find(|c| c.number == ContainerNumber(number))
            .expect("container to duplicate must exist");
        self.containers.push(copy);
        self
    }

    /// Remove subject `id`.
    pub fn without_subject(mut self, id: u32) -> Self {
        self.subjects.retain(|s| s.tracking_id != TrackingId(id));
        self
    }

    /// Remove container `number`.
    pub fn without_container(mut self, number: u32) -> Self {
        self.containers.retain(|c| c.number != ContainerNumber(number));
        self
    }

    /// Keep only the first `len` events of group `key`.
    pub fn truncate_group(mut self, key: u32, len: usize) -> Self {
        let key = ContainerNumber(key);
        let mut kept = 0;
        self.events.retain(|e| {
            if e.container != key {
                return true;
            }
            kept += 1;
            kept <= len
        });
        self
    }

    /// Rewrite the participant of every event in group `key` whose
    /// participant is `from`.
    pub fn reassign_participant(mut self, key: u32, from: u32, to: u32) -> Self {
        for e in &mut self.events {
            if e.container == ContainerNumber(key) && e.participant == TrackingId(from) {
                e.participant = TrackingId(to);
            }
        }
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::from_parts(self.config, self.subjects, self.containers, self.events)
    }

    /// Build and index, panicking if indexing fails.
    pub fn fixture(self) -> Fixture {
        Fixture::from_dataset(self.build()).expect("edited dataset must still index")
    }
}
