//! [`QuerySuite`]: an ordered set of queries run against one fixture.

use std::error::Error;
use std::fmt;

use tackle_core::QueryError;
use tackle_dataset::Fixture;

use crate::indexed::{IndexedContainersForSubject, IndexedEventsPerContainer, SingleIndexedLookup};
use crate::query::{Complexity, LookupQuery, QueryFamily};
use crate::scan::{NestedEventScan, ScanContainersForSubject, ScanSubjects};

/// The result of running one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOutcome {
    /// [`LookupQuery::name`] of the query.
    pub name: String,
    /// [`LookupQuery::complexity`] of the query.
    pub complexity: Complexity,
    /// [`LookupQuery::family`] of the query.
    pub family: QueryFamily,
    /// What the query returned.
    pub result: Result<u8, QueryError>,
}

/// Two queries of the same family returned different answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disagreement {
    /// The family both queries belong to.
    pub family: QueryFamily,
    /// Name and result of the first query seen for the family.
    pub expected: (String, u8),
    /// Name and result of the query that differed.
    pub found: (String, u8),
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} queries disagree: {} returned {}, {} returned {}",
            self.family, self.expected.0, self.expected.1, self.found.0, self.found.1
        )
    }
}

impl Error for Disagreement {}

/// An ordered collection of queries.
pub struct QuerySuite {
    queries: Vec<Box<dyn LookupQuery>>,
}

impl QuerySuite {
    /// Wrap an arbitrary list of queries.
    pub fn new(queries: Vec<Box<dyn LookupQuery>>) -> Self {
        Self { queries }
    }

    /// The six standard operations, scan and index variants interleaved by
    /// family.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(ScanSubjects),
            Box::new(ScanContainersForSubject),
            Box::new(IndexedContainersForSubject),
            Box::new(NestedEventScan),
            Box::new(IndexedEventsPerContainer),
            Box::new(SingleIndexedLookup),
        ])
    }

    /// The queries in run order.
    pub fn queries(&self) -> &[Box<dyn LookupQuery>] {
        &self.queries
    }

    /// Find a query by name.
    pub fn get(&self, name: &str) -> Option<&dyn LookupQuery> {
        self.queries
            .iter()
            .find(|q| q.name() == name)
            .map(|q| q.as_ref())
    }

    /// Queries whose complexity is at most `max`.
    pub fn bounded_by(&self, max: Complexity) -> impl Iterator<Item = &dyn LookupQuery> {
        self.queries
            .iter()
            .filter(move |q| q.complexity() <= max)
            .map(|q| q.as_ref())
    }

    /// Number of queries.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether the suite holds no queries.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Run every query once. A failing query does not stop the rest.
    pub fn run(&self, fixture: &Fixture) -> Vec<QueryOutcome> {
        self.queries
            .iter()
            .map(|q| {
                let result = q.run(fixture);
                if let Err(e) = &result {
                    log::warn!("query '{}' failed: {e}", q.name());
                }
                QueryOutcome {
                    name: q.name().to_string(),
                    complexity: q.complexity(),
                    family: q.family(),
                    result,
                }
            })
            .collect()
    }

    /// Check that successful outcomes agree within each family.
    ///
    /// Failed outcomes are skipped; the first success seen for a family is
    /// the reference the others are compared with.
    pub fn verify_agreement(outcomes: &[QueryOutcome]) -> Result<(), Disagreement> {
        let mut seen: Vec<(QueryFamily, &str, u8)> = Vec::new();
        for outcome in outcomes {
            let Ok(&value) = outcome.result.as_ref() else {
                continue;
            };
            let reference = seen
                .iter()
                .find(|(family, _, _)| *family == outcome.family)
                .copied();
            match reference {
                Some((family, name, expected)) if expected != value => {
                    return Err(Disagreement {
                        family,
                        expected: (name.to_string(), expected),
                        found: (outcome.name.clone(), value),
                    });
                }
                Some(_) => {}
                None => seen.push((outcome.family, outcome.name.as_str(), value)),
            }
        }
        Ok(())
    }
}

impl Default for QuerySuite {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for QuerySuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.queries.iter().map(|q| q.name()))
            .finish()
    }
}
