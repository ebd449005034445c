//! # Garden Events
//!
//! Defines all event types that flow through the garden bus.
//!
//! Each event corresponds to exactly one committed checkpoint in the
//! registry; the publishing side guarantees commit-before-publish.

use garden_types::{Address, GrowthStage, PlantId};
use serde::{Deserialize, Serialize};

/// All events that can be published to the garden bus.
///
/// One notification per observable transition. A single operation may
/// emit more than one event (a watering that crosses a stage boundary
/// emits `PlantWatered` followed by `StageAdvanced`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GardenEvent {
    /// A new plant record was created.
    PlantCreated {
        /// The assigned record id.
        id: PlantId,
        /// The creator, now the record's owner.
        owner: Address,
    },

    /// A plant was watered by its owner.
    PlantWatered {
        /// The watered record's id.
        id: PlantId,
        /// Water level after the increment was applied.
        water_level: u8,
    },

    /// A plant advanced one growth stage.
    StageAdvanced {
        /// The advanced record's id.
        id: PlantId,
        /// The stage the plant just reached.
        stage: GrowthStage,
    },

    /// A plant's death was checkpointed.
    PlantDied {
        /// The dead record's id.
        id: PlantId,
    },
}

impl GardenEvent {
    /// Returns the topic this event belongs to.
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::PlantCreated { .. } => EventTopic::Creation,
            Self::PlantWatered { .. } => EventTopic::Care,
            Self::StageAdvanced { .. } | Self::PlantDied { .. } => EventTopic::Lifecycle,
        }
    }

    /// Returns the plant id the event concerns.
    pub fn plant_id(&self) -> PlantId {
        match self {
            Self::PlantCreated { id, .. }
            | Self::PlantWatered { id, .. }
            | Self::StageAdvanced { id, .. }
            | Self::PlantDied { id } => *id,
        }
    }
}

/// Topics for event filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// Record creation events.
    Creation,
    /// Owner care events (watering).
    Care,
    /// Time-driven lifecycle events (stage changes, death).
    Lifecycle,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Plant ids to include. Empty means all plants.
    pub plant_ids: Vec<PlantId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            plant_ids: Vec::new(),
        }
    }

    /// Create a filter for events about specific plants.
    #[must_use]
    pub fn plants(plant_ids: Vec<PlantId>) -> Self {
        Self {
            topics: Vec::new(),
            plant_ids,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &GardenEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let plant_match = self.plant_ids.is_empty() || self.plant_ids.contains(&event.plant_id());

        topic_match && plant_match
    }
}
