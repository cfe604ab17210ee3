//! Error types for the Tackle lookup benchmark.
//!
//! One enum per stage: dataset configuration, index building, and query
//! execution. [`FixtureError`] wraps the first two for constructors that
//! run generation and indexing back to back.

use std::error::Error;
use std::fmt;

use crate::id::{ContainerNumber, TrackingId};

/// Errors detected while validating a dataset configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The dataset size is zero or not a multiple of 3.
    InvalidSize {
        /// The rejected size.
        size: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "dataset size must be a positive multiple of 3, got {size}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from building the auxiliary lookup indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// Two subjects share a tracking id.
    DuplicateSubject {
        /// The repeated id.
        id: TrackingId,
    },
    /// Two containers share a container number.
    DuplicateContainer {
        /// The repeated number.
        number: ContainerNumber,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSubject { id } => write!(f, "duplicate subject tracking id {id}"),
            Self::DuplicateContainer { number } => {
                write!(f, "duplicate container number {number}")
            }
        }
    }
}

impl Error for IndexError {}

/// The scan or index a query consulted when a key went missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Linear scan over the subject collection.
    SubjectScan,
    /// Linear filter over the event collection.
    EventScan,
    /// The subject-by-id index.
    SubjectIndex,
    /// The container-by-id index.
    ContainerIndex,
    /// The events-by-container index.
    EventIndex,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SubjectScan => "subject scan",
            Self::EventScan => "event scan",
            Self::SubjectIndex => "subject-by-id index",
            Self::ContainerIndex => "container-by-id index",
            Self::EventIndex => "events-by-container index",
        };
        f.write_str(name)
    }
}

/// Errors from a single query operation.
///
/// Fatal to the invoked operation only; the fixture is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A key was absent from a scan or an index.
    KeyNotFound {
        /// Where the key was looked up.
        lookup: Lookup,
        /// The raw key value.
        key: u32,
    },
    /// The target event group is too short for the requested position.
    IndexOutOfRange {
        /// The group key.
        key: ContainerNumber,
        /// The requested zero-based position.
        position: usize,
        /// The actual group length.
        len: usize,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound { lookup, key } => write!(f, "key {key} not found in {lookup}"),
            Self::IndexOutOfRange { key, position, len } => write!(
                f,
                "event position {position} out of range for group {key} of length {len}"
            ),
        }
    }
}

impl Error for QueryError {}

/// Errors from constructing a fixture (generation followed by indexing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureError {
    /// The dataset configuration was rejected.
    Config(ConfigError),
    /// The index build failed.
    Index(IndexError),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Index(e) => write!(f, "index: {e}"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Index(e) => Some(e),
        }
    }
}

impl From<ConfigError> for FixtureError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<IndexError> for FixtureError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}
