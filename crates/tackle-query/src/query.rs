//! The [`LookupQuery`] trait and its descriptive labels.

use std::fmt;

use tackle_core::QueryError;
use tackle_dataset::Fixture;

/// Asymptotic cost of a query in the dataset size n.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    /// O(1) expected.
    Constant,
    /// O(n).
    Linear,
    /// O(n²).
    Quadratic,
    /// O(n³).
    Cubic,
}

impl Complexity {
    /// The polynomial degree: 0 for constant up to 3 for cubic.
    pub fn degree(self) -> u32 {
        match self {
            Self::Constant => 0,
            Self::Linear => 1,
            Self::Quadratic => 2,
            Self::Cubic => 3,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Constant => "O(1)",
            Self::Linear => "O(n)",
            Self::Quadratic => "O(n²)",
            Self::Cubic => "O(n³)",
        };
        f.write_str(label)
    }
}

/// Queries in the same family compute the same answer by different means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryFamily {
    /// Colour ordinal of the last subject.
    SubjectColor,
    /// Tier ordinal of the container whose third member is the last subject.
    ContainerTier,
    /// Outcome ordinal of the third event in the last group.
    EventOutcome,
}

impl fmt::Display for QueryFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SubjectColor => "subject colour",
            Self::ContainerTier => "container tier",
            Self::EventOutcome => "event outcome",
        };
        f.write_str(label)
    }
}

/// A read-only access pattern run against a [`Fixture`].
///
/// # Contract
///
/// - `run()` MUST be pure: the same fixture always yields the same result,
///   and nothing is written.
/// - `&self`: queries hold no state, so one instance may be shared by any
///   number of threads.
///
/// # Object safety
///
/// This trait is object-safe; [`QuerySuite`](crate::QuerySuite) stores
/// queries as `Vec<Box<dyn LookupQuery>>`.
///
/// # Examples
///
/// ```
/// use tackle_core::QueryError;
/// use tackle_dataset::Fixture;
/// use tackle_query::{Complexity, LookupQuery, QueryFamily};
///
/// struct FirstColor;
///
/// impl LookupQuery for FirstColor {
///     fn name(&self) -> &str { "first_color" }
///     fn complexity(&self) -> Complexity { Complexity::Constant }
///     fn family(&self) -> QueryFamily { QueryFamily::SubjectColor }
///
///     fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
///         Ok(fixture.dataset().subjects()[0].color.ordinal())
///     }
/// }
///
/// let fixture = Fixture::with_size(9).unwrap();
/// assert_eq!(FirstColor.run(&fixture), Ok(0));
/// ```
pub trait LookupQuery: Send + Sync + 'static {
    /// Stable name, used as the benchmark id.
    fn name(&self) -> &str;

    /// How the cost grows with the dataset size.
    fn complexity(&self) -> Complexity;

    /// Which answer this query computes.
    fn family(&self) -> QueryFamily;

    /// Execute against `fixture`, returning a tag ordinal.
    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_labels() {
        assert_eq!(Complexity::Constant.to_string(), "O(1)");
        assert_eq!(Complexity::Quadratic.to_string(), "O(n²)");
        assert_eq!(Complexity::Cubic.degree(), 3);
        assert!(Complexity::Linear < Complexity::Quadratic);
    }
}
