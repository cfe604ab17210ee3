//! Scan and index variants of each family must return the same answer.

use proptest::prelude::*;
use tackle_core::{Container, ContainerNumber, TierTag, TrackingId};
use tackle_dataset::{Dataset, DatasetConfig, Fixture};
use tackle_query::{
    IndexedContainersForSubject, IndexedEventsPerContainer, LookupQuery, NestedEventScan,
    QueryFamily, QuerySuite, ScanContainersForSubject, ScanSubjects, SingleIndexedLookup,
};
use tackle_test_utils::{fixture, DatasetBuilder};

// ── Concrete scenarios ──────────────────────────────────────────

#[test]
fn default_size_answers() {
    let f = Fixture::new(DatasetConfig::default()).unwrap();
    assert_eq!(ScanSubjects.run(&f), Ok(2));
    assert_eq!(ScanContainersForSubject.run(&f), Ok(2));
    assert_eq!(IndexedContainersForSubject.run(&f), Ok(2));
    assert_eq!(IndexedEventsPerContainer.run(&f), Ok(2));
    assert_eq!(SingleIndexedLookup.run(&f), Ok(2));
}

#[test]
fn minimum_size_runs_every_query() {
    let f = fixture(3);
    let outcomes = QuerySuite::standard().run(&f);
    assert!(outcomes.iter().all(|o| o.result.is_ok()), "{outcomes:?}");
    QuerySuite::verify_agreement(&outcomes).unwrap();
}

#[test]
fn standard_suite_agrees_at_moderate_size() {
    let f = fixture(60);
    let outcomes = QuerySuite::standard().run(&f);
    QuerySuite::verify_agreement(&outcomes).unwrap();

    let events: Vec<u8> = outcomes
        .iter()
        .filter(|o| o.family == QueryFamily::EventOutcome)
        .map(|o| o.result.clone().unwrap())
        .collect();
    assert_eq!(events.len(), 3);
}

#[test]
fn reassigned_participant_still_agrees() {
    // Third event of group 2 (N=9) now names subject 0 instead of 8.
    let f = DatasetBuilder::new(9).reassign_participant(2, 8, 0).fixture();
    let nested = NestedEventScan.run(&f).unwrap();
    assert_eq!(IndexedEventsPerContainer.run(&f), Ok(nested));
    assert_eq!(SingleIndexedLookup.run(&f), Ok(nested));
}

#[test]
fn dropped_last_container_zeroes_tier_answers() {
    // Without container N/3-1 no container lists the last subject.
    let f = DatasetBuilder::new(30).without_container(9).fixture();
    assert_eq!(ScanContainersForSubject.run(&f), Ok(0));
    assert_eq!(IndexedContainersForSubject.run(&f), Ok(0));
}

#[test]
fn tier_comes_from_last_matching_container() {
    // N=9: four containers list subject 8 third, the trailing one does not.
    let generated = Dataset::with_size(9).unwrap();
    let tiers = [TierTag::Hard, TierTag::Medium, TierTag::Easy, TierTag::Medium];
    let mut containers: Vec<Container> = tiers
        .iter()
        .zip(0u32..)
        .map(|(&tier, n)| Container {
            number: ContainerNumber(n),
            tier,
            member_refs: [TrackingId(n), TrackingId(n + 3), TrackingId(8)],
        })
        .collect();
    containers.push(Container {
        number: ContainerNumber(4),
        tier: TierTag::Hard,
        member_refs: [TrackingId(0), TrackingId(1), TrackingId(2)],
    });
    let dataset = Dataset::from_parts(
        generated.config(),
        generated.subjects().to_vec(),
        containers,
        generated.events().to_vec(),
    );
    let f = Fixture::from_dataset(dataset).unwrap();

    assert_eq!(ScanContainersForSubject.run(&f), Ok(TierTag::Medium.ordinal()));
    assert_eq!(IndexedContainersForSubject.run(&f), Ok(TierTag::Medium.ordinal()));
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn container_tier_variants_agree(k in 1u32..=200) {
        let f = fixture(k * 3);
        prop_assert_eq!(
            ScanContainersForSubject.run(&f),
            IndexedContainersForSubject.run(&f)
        );
    }

    #[test]
    fn event_outcome_variants_agree(k in 1u32..=20) {
        let f = fixture(k * 3);
        let single = SingleIndexedLookup.run(&f);
        prop_assert_eq!(IndexedEventsPerContainer.run(&f), single.clone());
        prop_assert_eq!(NestedEventScan.run(&f), single);
    }

    #[test]
    fn subject_color_is_last_index_mod_three(k in 1u32..=400) {
        let size = k * 3;
        let f = fixture(size);
        prop_assert_eq!(ScanSubjects.run(&f), Ok(((size - 1) % 3) as u8));
    }
}
