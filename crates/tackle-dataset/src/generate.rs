//! Deterministic generation of the three record collections.
//!
//! Every field is a formula of the generation index; there is no
//! randomness, so generating twice from the same [`DatasetConfig`] yields
//! equal datasets.

use tackle_core::{
    ColorTag, ConfigError, Container, ContainerNumber, Event, OutcomeTag, Subject, TierTag,
    TrackingId,
};

use crate::config::{DatasetConfig, Targets};

/// The subject, container and event collections for one dataset size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    config: DatasetConfig,
    subjects: Vec<Subject>,
    containers: Vec<Container>,
    events: Vec<Event>,
}

impl Dataset {
    /// Generate the collections for `config`.
    ///
    /// - N subjects, `tracking_id = i`.
    /// - N/3 containers, members `i`, `i + N/3`, `i + 2N/3`.
    /// - N events, `container = i mod N/3`, `participant = i`.
    pub fn generate(config: DatasetConfig) -> Self {
        let n = config.size();
        let third = config.container_count();

        let subjects: Vec<Subject> = (0..n)
            .map(|i| Subject {
                tracking_id: TrackingId(i),
                color: ColorTag::from_index(i),
            })
            .collect();

        let containers: Vec<Container> = (0..third)
            .map(|i| Container {
                number: ContainerNumber(i),
                tier: TierTag::from_index(i),
                member_refs: [TrackingId(i), TrackingId(i + third), TrackingId(i + 2 * third)],
            })
            .collect();

        let events: Vec<Event> = (0..n)
            .map(|i| Event {
                container: ContainerNumber(i % third),
                participant: TrackingId(i),
                outcome: OutcomeTag::from_index(i),
            })
            .collect();

        log::debug!(
            "generated dataset: {} subjects, {} containers, {} events",
            subjects.len(),
            containers.len(),
            events.len()
        );

        Self {
            config,
            subjects,
            containers,
            events,
        }
    }

    /// Validate `size`, then [`generate`](Self::generate).
    pub fn with_size(size: u32) -> Result<Self, ConfigError> {
        Ok(Self::generate(DatasetConfig::new(size)?))
    }

    /// Wrap externally supplied collections.
    ///
    /// No invariant is checked here; the index builder and the queries
    /// report what they find.
    pub fn from_parts(
        config: DatasetConfig,
        subjects: Vec<Subject>,
        containers: Vec<Container>,
        events: Vec<Event>,
    ) -> Self {
        Self {
            config,
            subjects,
            containers,
            events,
        }
    }

    /// The configuration this dataset was built for.
    pub fn config(&self) -> DatasetConfig {
        self.config
    }

    /// Shorthand for `self.config().targets()`.
    pub fn targets(&self) -> Targets {
        self.config.targets()
    }

    /// Subjects in generation order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Containers in generation order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Events in generation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
