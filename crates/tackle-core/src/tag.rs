//! Three-valued tag enums assigned cyclically by `index mod 3`.
//!
//! Every tag exposes the same pair of operations: [`from_index`] picks the
//! variant for a generation index, [`ordinal`] returns the variant's
//! position, which is what the query operations report.
//!
//! [`from_index`]: ColorTag::from_index
//! [`ordinal`]: ColorTag::ordinal

/// Colour of a [`Subject`](crate::Subject).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorTag {
    /// Ordinal 0.
    Black = 0,
    /// Ordinal 1.
    White = 1,
    /// Ordinal 2.
    Gray = 2,
}

impl ColorTag {
    /// The tag for generation index `i` (`i mod 3`).
    pub fn from_index(i: u32) -> Self {
        match i % 3 {
            0 => Self::Black,
            1 => Self::White,
            _ => Self::Gray,
        }
    }

    /// Position of the variant in declaration order.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Tier of a [`Container`](crate::Container).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TierTag {
    /// Ordinal 0.
    Easy = 0,
    /// Ordinal 1.
    Medium = 1,
    /// Ordinal 2.
    Hard = 2,
}

impl TierTag {
    /// The tag for generation index `i` (`i mod 3`).
    pub fn from_index(i: u32) -> Self {
        match i % 3 {
            0 => Self::Easy,
            1 => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// Position of the variant in declaration order.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Outcome of an [`Event`](crate::Event).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OutcomeTag {
    /// Ordinal 0.
    Fast = 0,
    /// Ordinal 1.
    Average = 1,
    /// Ordinal 2.
    Slow = 2,
}

impl OutcomeTag {
    /// The tag for generation index `i` (`i mod 3`).
    pub fn from_index(i: u32) -> Self {
        match i % 3 {
            0 => Self::Fast,
            1 => Self::Average,
            _ => Self::Slow,
        }
    }

    /// Position of the variant in declaration order.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}
