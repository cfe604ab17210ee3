//! Query behaviour on datasets that break the generator's invariants.

use tackle_core::{ContainerNumber, IndexError, Lookup, QueryError, TrackingId};
use tackle_dataset::{Fixture, Indices};
use tackle_query::{
    IndexedContainersForSubject, IndexedEventsPerContainer, LookupQuery, NestedEventScan,
    ScanContainersForSubject, ScanSubjects, SingleIndexedLookup,
};
use tackle_test_utils::DatasetBuilder;

#[test]
fn duplicate_keys_stop_the_index_build() {
    let dataset = DatasetBuilder::new(9).duplicate_subject(4).build();
    assert_eq!(
        Indices::build(&dataset).unwrap_err(),
        IndexError::DuplicateSubject { id: TrackingId(4) }
    );

    let dataset = DatasetBuilder::new(9).duplicate_container(1).build();
    assert_eq!(
        Fixture::from_dataset(dataset).unwrap_err(),
        IndexError::DuplicateContainer {
            number: ContainerNumber(1)
        }
    );
}

#[test]
fn missing_target_subject() {
    let f = DatasetBuilder::new(9).without_subject(8).fixture();
    let scan = QueryError::KeyNotFound {
        lookup: Lookup::SubjectScan,
        key: 8,
    };
    let index = QueryError::KeyNotFound {
        lookup: Lookup::SubjectIndex,
        key: 8,
    };
    assert_eq!(ScanSubjects.run(&f), Err(scan.clone()));
    assert_eq!(ScanContainersForSubject.run(&f), Err(scan));
    assert_eq!(IndexedContainersForSubject.run(&f), Err(index.clone()));
    assert_eq!(SingleIndexedLookup.run(&f), Err(index.clone()));
    assert_eq!(IndexedEventsPerContainer.run(&f), Err(index));
}

#[test]
fn short_target_group() {
    let f = DatasetBuilder::new(9).truncate_group(2, 2).fixture();
    let expected = QueryError::IndexOutOfRange {
        key: ContainerNumber(2),
        position: 2,
        len: 2,
    };
    assert_eq!(NestedEventScan.run(&f), Err(expected.clone()));
    assert_eq!(IndexedEventsPerContainer.run(&f), Err(expected.clone()));
    assert_eq!(SingleIndexedLookup.run(&f), Err(expected));
}

#[test]
fn empty_target_group() {
    let f = DatasetBuilder::new(9).truncate_group(2, 0).fixture();
    assert_eq!(
        NestedEventScan.run(&f),
        Err(QueryError::KeyNotFound {
            lookup: Lookup::EventScan,
            key: 2,
        })
    );
    assert_eq!(
        SingleIndexedLookup.run(&f),
        Err(QueryError::KeyNotFound {
            lookup: Lookup::EventIndex,
            key: 2,
        })
    );
}

#[test]
fn missing_target_container() {
    let f = DatasetBuilder::new(9).without_container(2).fixture();
    assert_eq!(
        SingleIndexedLookup.run(&f),
        Err(QueryError::KeyNotFound {
            lookup: Lookup::ContainerIndex,
            key: 2,
        })
    );
    // The looping variants only compare against containers that exist.
    assert_eq!(IndexedEventsPerContainer.run(&f), Ok(0));
    assert_eq!(NestedEventScan.run(&f), Ok(0));
}

#[test]
fn failures_leave_the_fixture_usable() {
    let f = DatasetBuilder::new(9).truncate_group(2, 1).fixture();
    assert!(SingleIndexedLookup.run(&f).is_err());
    assert!(SingleIndexedLookup.run(&f).is_err());
    assert_eq!(ScanSubjects.run(&f), Ok(2));
}
