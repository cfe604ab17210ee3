//! Query operations that resolve records through the hash indices.

use tackle_core::QueryError;
use tackle_dataset::Fixture;

use crate::query::{Complexity, LookupQuery, QueryFamily};
use crate::resolve::{indexed_container, indexed_group, indexed_subject, target_event};

/// [`ScanContainersForSubject`](crate::ScanContainersForSubject) with the
/// subject resolved through the subject-by-id index.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexedContainersForSubject;

impl LookupQuery for IndexedContainersForSubject {
    fn name(&self) -> &str {
        "IndexedContainersForSubject"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::ContainerTier
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let indices = fixture.indices();
        let target = fixture.targets().subject;

        let mut result = 0;
        for container in fixture.dataset().containers() {
            let subject = indexed_subject(indices, target)?;
            if container.third_member() == subject.tracking_id {
                result = container.tier.ordinal();
            }
        }
        Ok(result)
    }
}

/// For every container, fetch the target group from the events-by-container
/// index, take its third event and resolve the participant by id.
///
/// Returns the outcome ordinal of the last matching container, or 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexedEventsPerContainer;

impl LookupQuery for IndexedEventsPerContainer {
    fn name(&self) -> &str {
        "IndexedEventsPerContainer"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::EventOutcome
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let indices = fixture.indices();
        let targets = fixture.targets();

        let mut result = 0;
        for container in fixture.dataset().containers() {
            let group = indexed_group(indices, targets.group)?;
            let event = target_event(group, &targets)?;
            let subject = indexed_subject(indices, event.participant)?;
            if container.number == event.container && subject.tracking_id == event.participant {
                result = event.outcome.ordinal();
            }
        }
        Ok(result)
    }
}

/// One pass, no outer loop: target group, third event, participant and
/// container each resolved through their index.
///
/// Returns the outcome ordinal if both identities match, or 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleIndexedLookup;

impl LookupQuery for SingleIndexedLookup {
    fn name(&self) -> &str {
        "SingleIndexedLookup"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Constant
    }

    fn family(&self) -> QueryFamily {
        QueryFamily::EventOutcome
    }

    fn run(&self, fixture: &Fixture) -> Result<u8, QueryError> {
        let indices = fixture.indices();
        let targets = fixture.targets();

        let group = indexed_group(indices, targets.group)?;
        let event = target_event(group, &targets)?;
        let subject = indexed_subject(indices, event.participant)?;
        let container = indexed_container(indices, event.container)?;

        let matched =
            container.number == event.container && subject.tracking_id == event.participant;
        Ok(if matched { event.outcome.ordinal() } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tackle_core::{
        ColorTag, Container, ContainerNumber, Event, Lookup, OutcomeTag, Subject, TierTag,
        TrackingId,
    };
    use tackle_dataset::{Dataset, DatasetConfig};

    fn fixture(size: u32) -> Fixture {
        Fixture::with_size(size).unwrap()
    }

    #[test]
    fn default_size_results() {
        let f = fixture(999);
        assert_eq!(IndexedContainersForSubject.run(&f), Ok(2));
        assert_eq!(IndexedEventsPerContainer.run(&f), Ok(2));
        assert_eq!(SingleIndexedLookup.run(&f), Ok(2));
    }

    #[test]
    fn minimum_size_succeeds() {
        let f = fixture(3);
        assert_eq!(IndexedContainersForSubject.run(&f), Ok(0));
        assert_eq!(IndexedEventsPerContainer.run(&f), Ok(2));
        assert_eq!(SingleIndexedLookup.run(&f), Ok(2));
    }

    #[test]
    fn size_six_picks_slow_outcome_of_group_one() {
        // N=6: group 1 holds participants 1, 3, 5; 5 mod 3 = 2.
        let f = fixture(6);
        assert_eq!(SingleIndexedLookup.run(&f), Ok(2));
        // Container 1's third member is 1 + 4 = 5; tier of 1 is Medium.
        assert_eq!(IndexedContainersForSubject.run(&f), Ok(1));
    }

    fn partial_fixture(events: Vec<Event>, with_container: bool) -> Fixture {
        let config = DatasetConfig::new(3).unwrap();
        let subjects = (0..3)
            .map(|i| Subject {
                tracking_id: TrackingId(i),
                color: ColorTag::from_index(i),
            })
            .collect();
        let containers = if with_container {
            vec![Container {
                number: ContainerNumber(0),
                tier: TierTag::Easy,
                member_refs: [TrackingId(0), TrackingId(1), TrackingId(2)],
            }]
        } else {
            Vec::new()
        };
        Fixture::from_dataset(Dataset::from_parts(config, subjects, containers, events)).unwrap()
    }

    fn event(participant: u32) -> Event {
        Event {
            container: ContainerNumber(0),
            participant: TrackingId(participant),
            outcome: OutcomeTag::from_index(participant),
        }
    }

    #[test]
    fn missing_group_is_key_not_found() {
        let f = partial_fixture(Vec::new(), true);
        let expected = Err(QueryError::KeyNotFound {
            lookup: Lookup::EventIndex,
            key: 0,
        });
        assert_eq!(SingleIndexedLookup.run(&f), expected);
        assert_eq!(IndexedEventsPerContainer.run(&f), expected);
    }

    #[test]
    fn missing_container_is_key_not_found() {
        let f = partial_fixture(vec![event(0), event(1), event(2)], false);
        assert_eq!(
            SingleIndexedLookup.run(&f),
            Err(QueryError::KeyNotFound {
                lookup: Lookup::ContainerIndex,
                key: 0,
            })
        );
        // No containers to iterate, so the per-container variant never looks.
        assert_eq!(IndexedEventsPerContainer.run(&f), Ok(0));
    }

    #[test]
    fn missing_participant_is_key_not_found() {
        let f = partial_fixture(vec![event(0), event(1), event(7)], true);
        assert_eq!(
            SingleIndexedLookup.run(&f),
            Err(QueryError::KeyNotFound {
                lookup: Lookup::SubjectIndex,
                key: 7,
            })
        );
    }

    #[test]
    fn short_group_is_out_of_range() {
        let f = partial_fixture(vec![event(0), event(1)], true);
        assert_eq!(
            IndexedEventsPerContainer.run(&f),
            Err(QueryError::IndexOutOfRange {
                key: ContainerNumber(0),
                position: 2,
                len: 2,
            })
        );
    }
}
