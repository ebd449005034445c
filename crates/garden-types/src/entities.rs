//! # Core Domain Entities
//!
//! Defines the entities that make up the garden ledger's record set.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `PlantId`
//! - **Time & Value**: `Timestamp`, `Amount`
//! - **Lifecycle**: `GrowthStage`, `Plant`

use serde::{Deserialize, Serialize};

/// A 20-byte account address supplied by the ledger environment.
///
/// Caller identity is provided by the environment and is unforgeable;
/// the ledger never derives or verifies addresses itself.
pub type Address = [u8; 20];

/// Unique plant record identifier, assigned by a monotonic counter
/// starting at 1. Id 0 is never assigned.
pub type PlantId = u64;

/// Timestamp in seconds since UNIX epoch.
///
/// The environment guarantees `now` is monotonically non-decreasing
/// across calls; a `now` earlier than a stored checkpoint is an error,
/// never clamped.
pub type Timestamp = u64;

/// Value amount in base units. u128 covers all practical fee and refund
/// arithmetic without a big-integer dependency.
pub type Amount = u128;

/// Water level ceiling. Levels are always within `0..=MAX_WATER_LEVEL`.
pub const MAX_WATER_LEVEL: u8 = 100;

/// Growth phases a live plant passes through, in order.
///
/// Transitions only move forward and never skip a phase in a single
/// recomputation step:
///
/// ```text
/// [Seed] ──→ [Sprout] ──→ [Growing] ──→ [Blooming]
/// ```
///
/// Once a plant dies its stage is frozen at whatever phase it had
/// reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum GrowthStage {
    /// Freshly planted. Every plant starts here.
    #[default]
    Seed,
    /// First visible growth.
    Sprout,
    /// Established and growing.
    Growing,
    /// Fully grown.
    Blooming,
}

impl GrowthStage {
    /// Returns the next stage, or `None` for `Blooming` (terminal).
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Seed => Some(Self::Sprout),
            Self::Sprout => Some(Self::Growing),
            Self::Growing => Some(Self::Blooming),
            Self::Blooming => None,
        }
    }

}

/// A plant record as stored in the registry.
///
/// The stored form is a checkpoint: `water_level` and `stage` are valid
/// *as of* `last_checkpoint`. The state "right now" is always derived
/// from this checkpoint by the growth engine; it is never advanced by a
/// background task.
///
/// ## Fields
///
/// - `id`, `owner`, `planted_date`: immutable after creation
/// - `last_checkpoint`: refreshed by every persisted mutation, not only
///   watering
/// - `exists`: true permanently once creation succeeds; records are
///   never removed, only marked dead
/// - `is_dead`: terminal; freezes `stage` and `water_level`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Unique identifier, assigned at creation.
    pub id: PlantId,
    /// Creator and sole authorized waterer.
    pub owner: Address,
    /// Current growth phase as of `last_checkpoint`.
    pub stage: GrowthStage,
    /// Creation time.
    pub planted_date: Timestamp,
    /// Time of the last persisted state update.
    pub last_checkpoint: Timestamp,
    /// Water level in `0..=100` as of `last_checkpoint`.
    pub water_level: u8,
    /// True once created. Soft lifecycle: never unset.
    pub exists: bool,
    /// True once water has sat at zero beyond the grace period.
    pub is_dead: bool,
}

impl Plant {
    /// Creates a freshly planted record.
    pub fn new(id: PlantId, owner: Address, now: Timestamp) -> Self {
        Self {
            id,
            owner,
            stage: GrowthStage::Seed,
            planted_date: now,
            last_checkpoint: now,
            water_level: MAX_WATER_LEVEL,
            exists: true,
            is_dead: false,
        }
    }

    /// Returns true if `caller` is the record's owner.
    pub fn is_owned_by(&self, caller: Address) -> bool {
        self.owner == caller
    }
}
