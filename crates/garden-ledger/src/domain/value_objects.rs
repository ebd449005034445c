//! Value objects returned by garden operations.

use garden_types::{Amount, GrowthStage, PlantId};
use serde::{Deserialize, Serialize};

/// Result of a successful creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOutcome {
    /// The newly assigned record id.
    pub id: PlantId,
    /// Overpayment returned to the caller (0 for an exact payment).
    pub refund: Amount,
}

/// Result of a successful watering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterOutcome {
    /// Water level after the increment was applied.
    pub water_level: u8,
    /// Stage after the watering (advanced at most one step).
    pub stage: GrowthStage,
}
