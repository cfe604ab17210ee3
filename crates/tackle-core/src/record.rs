//! The three record types: [`Subject`], [`Container`] and [`Event`].
//!
//! Records are plain `Copy` values. They are created once by the generator
//! and never mutated afterwards.

use crate::id::{ContainerNumber, TrackingId};
use crate::tag::{ColorTag, OutcomeTag, TierTag};

/// A tracked subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subject {
    /// Unique identifier, `0..N`.
    pub tracking_id: TrackingId,
    /// Colour tag, `tracking_id mod 3`.
    pub color: ColorTag,
}

/// A container holding one subject from each third of the subject range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    /// Unique identifier, `0..N/3`.
    pub number: ContainerNumber,
    /// Tier tag, `number mod 3`.
    pub tier: TierTag,
    /// Member subjects: `number`, `number + N/3`, `number + 2N/3`.
    pub member_refs: [TrackingId; 3],
}

impl Container {
    /// The member drawn from the last third of the subject range.
    pub fn third_member(&self) -> TrackingId {
        self.member_refs[2]
    }
}

/// One subject's participation in one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// The container this event belongs to; the grouping key.
    pub container: ContainerNumber,
    /// The participating subject.
    pub participant: TrackingId,
    /// Outcome tag, `participant mod 3`.
    pub outcome: OutcomeTag,
}
