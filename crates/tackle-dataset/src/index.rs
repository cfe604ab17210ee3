//! Auxiliary lookup indices over a [`Dataset`].
//!
//! Three maps, each built in a single pass over one collection:
//!
//! - subject-by-id: unique, `TrackingId → Subject`
//! - container-by-id: unique, `ContainerNumber → Container`
//! - events-by-container: grouped, `ContainerNumber → [Event]`, generation
//!   order preserved inside each group

use indexmap::map::Entry;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tackle_core::{Container, ContainerNumber, Event, IndexError, Subject, TrackingId};

use crate::generate::Dataset;

/// Events sharing one container number.
///
/// Generated datasets put exactly three events in every group, so groups
/// stay inline.
pub type EventGroup = SmallVec<[Event; 3]>;

/// Hash-backed lookup indices, read-only after [`build`](Indices::build).
#[derive(Clone, Debug)]
pub struct Indices {
    subjects_by_id: IndexMap<TrackingId, Subject>,
    containers_by_id: IndexMap<ContainerNumber, Container>,
    events_by_container: IndexMap<ContainerNumber, EventGroup>,
}

impl Indices {
    /// Build all three indices.
    ///
    /// Fails on the first repeated subject id or container number.
    /// Events are grouped, never deduplicated.
    pub fn build(dataset: &Dataset) -> Result<Self, IndexError> {
        let mut subjects_by_id = IndexMap::with_capacity(dataset.subjects().len());
        for subject in dataset.subjects() {
            match subjects_by_id.entry(subject.tracking_id) {
                Entry::Occupied(_) => {
                    return Err(IndexError::DuplicateSubject {
                        id: subject.tracking_id,
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(*subject);
                }
            }
        }

        let mut containers_by_id = IndexMap::with_capacity(dataset.containers().len());
        for container in dataset.containers() {
            match containers_by_id.entry(container.number) {
                Entry::Occupied(_) => {
                    return Err(IndexError::DuplicateContainer {
                        number: container.number,
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(*container);
                }
            }
        }

        let mut events_by_container: IndexMap<ContainerNumber, EventGroup> =
            IndexMap::with_capacity(dataset.containers().len());
        for event in dataset.events() {
            events_by_container
                .entry(event.container)
                .or_default()
                .push(*event);
        }

        log::debug!(
            "built indices: {} subjects, {} containers, {} event groups",
            subjects_by_id.len(),
            containers_by_id.len(),
            events_by_container.len()
        );

        Ok(Self {
            subjects_by_id,
            containers_by_id,
            events_by_container,
        })
    }

    /// Look up a subject by tracking id.
    pub fn subject(&self, id: TrackingId) -> Option<&Subject> {
        self.subjects_by_id.get(&id)
    }

    /// Look up a container by number.
    pub fn container(&self, number: ContainerNumber) -> Option<&Container> {
        self.containers_by_id.get(&number)
    }

    /// The events of one container, in generation order.
    pub fn events_for(&self, number: ContainerNumber) -> Option<&[Event]> {
        self.events_by_container.get(&number).map(|g| g.as_slice())
    }

    /// Number of distinct event groups.
    pub fn group_count(&self) -> usize {
        self.events_by_container.len()
    }
}
