//! Scan, indexed and grouped lookup operations for the Tackle benchmark.
//!
//! Six operations, three answers. Each family pairs a scan-based variant
//! with one or two index-based variants that must return the same value:
//!
//! | Query | Family | Cost |
//! |-------|--------|------|
//! | [`ScanSubjects`] | subject colour | O(n) |
//! | [`ScanContainersForSubject`] | container tier | O(n²) |
//! | [`IndexedContainersForSubject`] | container tier | O(n) |
//! | [`NestedEventScan`] | event outcome | O(n³) |
//! | [`IndexedEventsPerContainer`] | event outcome | O(n) |
//! | [`SingleIndexedLookup`] | event outcome | O(1) |
//!
//! All operations implement [`LookupQuery`] and are collected by
//! [`QuerySuite::standard`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod indexed;
pub mod query;
mod resolve;
pub mod scan;
pub mod suite;

pub use indexed::{IndexedContainersForSubject, IndexedEventsPerContainer, SingleIndexedLookup};
pub use query::{Complexity, LookupQuery, QueryFamily};
pub use scan::{NestedEventScan, ScanContainersForSubject, ScanSubjects};
pub use suite::{Disagreement, QueryOutcome, QuerySuite};
