//! Mock queries for suite and harness testing.
//!
//! - [`ConstQuery`]: returns a fixed ordinal.
//! - [`FailingQuery`]: fails deterministically after N calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use tackle_core::{Lookup, QueryError};
use tackle_dataset::Fixture;
use tackle_query::{Complexity, LookupQuery, QueryFamily, SingleIndexedLookup};

/// Returns `value` regardless of the fixture.
///
/// Pair two of these in one family with different values to provoke a
/// [`Disagreement`](tackle_query::Disagreement).
pub struct ConstQuery {
    pub name: String,
    pub family: QueryFamily,
    pub value: u8,
}

impl ConstQuery {
    pub fn new(name: impl Into<String>, family: QueryFamily, value: u8) -> Self {
        Self {
            name: name.into(),
            family,
            value,
        }
    }
}

impl LookupQuery for ConstQuery {
    fn name(&self) -> &str {
        &self.name
    }

    fn complexity(&self) -> Complexity {
        Complexity::Constant
    }

    fn family(&self) -> QueryFamily {
        self.family
    }

    fn run(&self, _fixture: &Fixture) -> Result<u8, QueryError> {
        Ok(self.value)
    }
}

/// Answers like [`SingleIndexedLookup`] for `succeed_count` calls, then
/// fails with [`QueryError::KeyNotFound`].
///
/// Uses `AtomicUsize` for the call counter so it satisfies `Sync`.
pub struct FailingQuery {
    pub name: String,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingQuery {
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `run()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl LookupQuery for FailingQuery {
    fn name(&self) -> &str {
        &self.name
    }

    fn complexity(&self) -> Complexity {
        Complexity::Constant
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::EventOutcome
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(QueryError::KeyNotFound {
                lookup: Lookup::EventIndex,
                key: fixture.targets().group.0,
            });
        }
        SingleIndexedLookup.run(fixture)
    }
}
