//! Shared lookup steps, each mapping a miss to the matching [`QueryError`].

use tackle_core::{Container, ContainerNumber, Event, Lookup, QueryError, Subject, TrackingId};
use tackle_dataset::{Indices, Targets};

/// Linear search for a subject.
pub(crate) fn scan_subject(subjects: &[Subject], id: TrackingId) -> Result<&Subject, QueryError> {
    subjects
        .iter()
        .find(|s| s.tracking_id == id)
        .ok_or(QueryError::KeyNotFound {
            lookup: Lookup::SubjectScan,
            key: id.0,
        })
}

/// Linear filter of the events belonging to `key`, copied out.
pub(crate) fn scan_group(events: &[Event], key: ContainerNumber) -> Result<Vec<Event>, QueryError> {
    let group: Vec<Event> = events.iter().filter(|e| e.container == key).copied().collect();
    if group.is_empty() {
        return Err(QueryError::KeyNotFound {
            lookup: Lookup::EventScan,
            key: key.0,
        });
    }
    Ok(group)
}

pub(crate) fn indexed_subject(indices: &Indices, id: TrackingId) -> Result<&Subject, QueryError> {
    indices.subject(id).ok_or(QueryError::KeyNotFound {
        lookup: Lookup::SubjectIndex,
        key: id.0,
    })
}

pub(crate) fn indexed_container(
    indices: &Indices,
    number: ContainerNumber,
) -> Result<&Container, QueryError> {
    indices.container(number).ok_or(QueryError::KeyNotFound {
        lookup: Lookup::ContainerIndex,
        key: number.0,
    })
}

pub(crate) fn indexed_group(
    indices: &Indices,
    key: ContainerNumber,
) -> Result<&[Event], QueryError> {
    indices.events_for(key).ok_or(QueryError::KeyNotFound {
        lookup: Lookup::EventIndex,
        key: key.0,
    })
}

/// The event at the target position of `group`.
pub(crate) fn target_event<'a>(
    group: &'a [Event],
    targets: &Targets,
) -> Result<&'a Event, QueryError> {
    group
        .get(targets.position)
        .ok_or(QueryError::IndexOutOfRange {
            key: targets.group,
            position: targets.position,
            len: group.len(),
        })
}
