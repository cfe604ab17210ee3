//! Query operations that locate records by linear scan.
//!
//! The outer loops of [`ScanContainersForSubject`] and [`NestedEventScan`]
//! repeat the same inner search once per container (and per subject). Only
//! the last iteration decides the result; the repetition is the cost being
//! measured and must stay.

use tackle_core::QueryError;
use tackle_dataset::Fixture;

use crate::query::{Complexity, LookupQuery, QueryFamily};
use crate::resolve::{scan_group, scan_subject, target_event};

/// Linear scan over subjects for the last tracking id.
///
/// Returns that subject's colour ordinal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanSubjects;

impl LookupQuery for ScanSubjects {
    fn name(&self) -> &str {
        "ScanSubjects"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::SubjectColor
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let target = fixture.targets().subject;
        let subject = scan_subject(fixture.dataset().subjects(), target)?;
        Ok(subject.color.ordinal())
    }
}

/// For every container, scan the subjects for the last tracking id and
/// compare it with the container's third member.
///
/// Returns the tier ordinal of the last matching container, or 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanContainersForSubject;

impl LookupQuery for ScanContainersForSubject {
    fn name(&self) -> &str {
        "ScanContainersForSubject"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Quadratic
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::ContainerTier
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let dataset = fixture.dataset();
        let target = fixture.targets().subject;

        let mut result = 0;
        for container in dataset.containers() {
            let subject = scan_subject(dataset.subjects(), target)?;
            if container.third_member() == subject.tracking_id {
                result = container.tier.ordinal();
            }
        }
        Ok(result)
    }
}

/// For every container and every subject, filter the events of the target
/// group out of the full event list and compare identities with its third
/// entry.
///
/// Returns the outcome ordinal of the last matching (container, subject)
/// pair, or 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestedEventScan;

impl LookupQuery for NestedEventScan {
    fn name(&self) -> &str {
        "NestedEventScan"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Cubic
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::EventOutcome
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let dataset = fixture.dataset();
        let targets = fixture.targets();

        let mut result = 0;
        for container in dataset.containers() {
            for subject in dataset.subjects() {
                let group = scan_group(dataset.events(), targets.group)?;
                let event = target_event(&group, &targets)?;
                if container.number == event.container && subject.tracking_id == event.participant
                {
                    result = event.outcome.ordinal();
                }
            }
        }
        Ok(result)
    }
}
