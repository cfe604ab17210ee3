//! Core types and errors for the Tackle lookup benchmark.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! record types shared by the generator, the index builder and the query
//! operations: strongly-typed IDs, the cyclic tag enums, the three record
//! types, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod record;
pub mod tag;

pub use error::{ConfigError, FixtureError, IndexError, Lookup, QueryError};
pub use id::{ContainerNumber, TrackingId};
pub use record::{Container, Event, Subject};
pub use tag::{ColorTag, OutcomeTag, TierTag};
