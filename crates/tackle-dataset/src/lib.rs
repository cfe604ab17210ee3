//! Synthetic dataset generation and lookup indices for the Tackle benchmark.
//!
//! Building a benchmark fixture is two steps, run once:
//!
//! 1. [`Dataset::generate`] produces the subject, container and event
//!    collections from a validated [`DatasetConfig`].
//! 2. [`Indices::build`] derives the subject-by-id, container-by-id and
//!    events-by-container maps.
//!
//! [`Fixture`] bundles both and is what the query operations consume.
//!
//! ```
//! use tackle_core::{ContainerNumber, TrackingId};
//! use tackle_dataset::Fixture;
//!
//! let fixture = Fixture::with_size(999).unwrap();
//! let targets = fixture.targets();
//! assert_eq!(targets.subject, TrackingId(998));
//! assert_eq!(targets.group, ContainerNumber(332));
//! assert_eq!(fixture.indices().events_for(targets.group).unwrap().len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod fixture;
pub mod generate;
pub mod index;

pub use config::{DatasetConfig, Targets};
pub use fixture::Fixture;
pub use generate::Dataset;
pub use index::{EventGroup, Indices};
