//! Strongly-typed record identifiers.

use std::fmt;

/// Identifies a [`Subject`](crate::Subject).
///
/// Subjects are generated in a contiguous run, so `TrackingId(n)` is also
/// the n-th subject in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackingId(pub u32);

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrackingId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a [`Container`](crate::Container).
///
/// Also the grouping key of [`Event`](crate::Event)s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerNumber(pub u32);

impl fmt::Display for ContainerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ContainerNumber {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(TrackingId(998).to_string(), "998");
        assert_eq!(ContainerNumber(332).to_string(), "332");
    }

    #[test]
    fn from_u32() {
        assert_eq!(TrackingId::from(7), TrackingId(7));
        assert_eq!(ContainerNumber::from(7), ContainerNumber(7));
    }
}
