//! Dataset size configuration and the query targets derived from it.

use tackle_core::{ConfigError, ContainerNumber, TrackingId};

/// Validated dataset size.
///
/// The size N is the number of subjects and events; containers number N/3.
/// N must be a positive multiple of 3 so the subject range splits into three
/// equal bands. The field is private, so every `DatasetConfig` in existence
/// satisfies that constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    size: u32,
}

impl DatasetConfig {
    /// Default dataset size.
    pub const DEFAULT_SIZE: u32 = 999;

    /// Smallest valid size: one container with a group of three events.
    pub const MIN_SIZE: u32 = 3;

    /// Validate `size` and build a config from it.
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        if size == 0 || size % 3 != 0 {
            return Err(ConfigError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    /// Number of subjects, and of events.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of containers, N/3.
    pub fn container_count(&self) -> u32 {
        self.size / 3
    }

    /// The records every query operation aims at.
    pub fn targets(&self) -> Targets {
        Targets {
            subject: TrackingId(self.size - 1),
            group: ContainerNumber(self.container_count() - 1),
            position: Targets::EVENT_POSITION,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Keys the query operations look up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Targets {
    /// The last subject, `N - 1`.
    pub subject: TrackingId,
    /// The last container and event group, `N/3 - 1`.
    pub group: ContainerNumber,
    /// Zero-based position of the event within the group.
    pub position: usize,
}

impl Targets {
    /// Queries read the third event of the target group.
    pub const EVENT_POSITION: usize = 2;
}
