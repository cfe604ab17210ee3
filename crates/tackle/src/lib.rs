//! Tackle: a benchmark of lookup strategies over three related collections.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tackle sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tackle::prelude::*;
//!
//! // Generate N=999 records and build the indices once.
//! let fixture = Fixture::with_size(999).unwrap();
//!
//! // Linear scan and hash lookup answer the same question.
//! assert_eq!(ScanContainersForSubject.run(&fixture), Ok(2));
//! assert_eq!(IndexedContainersForSubject.run(&fixture), Ok(2));
//!
//! // Or run the whole suite and check every family agrees.
//! let suite = QuerySuite::standard();
//! let outcomes = suite.run(&fixture);
//! QuerySuite::verify_agreement(&outcomes).unwrap();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tackle-core` | IDs, tags, records, errors |
//! | [`dataset`] | `tackle-dataset` | Generator, indices, `Fixture` |
//! | [`query`] | `tackle-query` | `LookupQuery` and the six operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`tackle-core`).
pub use tackle_core as types;

/// Dataset generation and indices (`tackle-dataset`).
///
/// Build a [`dataset::Fixture`] once and pass it by reference to queries.
pub use tackle_dataset as dataset;

/// Query operations (`tackle-query`).
///
/// The [`query::LookupQuery`] trait, the six standard operations and
/// [`query::QuerySuite`].
pub use tackle_query as query;

/// Common imports for typical Tackle usage.
///
/// ```rust
/// use tackle::prelude::*;
/// ```
pub mod prelude {
    // Records and IDs
    pub use tackle_core::{
        ColorTag, Container, ContainerNumber, Event, OutcomeTag, Subject, TierTag, TrackingId,
    };

    // Errors
    pub use tackle_core::{ConfigError, FixtureError, IndexError, Lookup, QueryError};

    // Dataset
    pub use tackle_dataset::{Dataset, DatasetConfig, Fixture, Indices, Targets};

    // Queries
    pub use tackle_query::{
        Complexity, IndexedContainersForSubject, IndexedEventsPerContainer, LookupQuery,
        NestedEventScan, QueryFamily, QueryOutcome, QuerySuite, ScanContainersForSubject,
        ScanSubjects, SingleIndexedLookup,
    };
}
