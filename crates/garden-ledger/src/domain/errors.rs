use garden_types::{Address, Amount, PlantId, Timestamp};
use thiserror::Error;

/// All error conditions for the garden ledger.
///
/// Every error is an outright call rejection: the registry is left
/// exactly as it was before the call, and nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("Plant not found: {id}")]
    PlantNotFound { id: PlantId },

    #[error("Caller {caller:?} is not the owner {owner:?} of plant {id}")]
    NotOwner {
        id: PlantId,
        caller: Address,
        owner: Address,
    },

    #[error("Insufficient payment: sent {sent}, required {required}")]
    InsufficientPayment { sent: Amount, required: Amount },

    #[error("Plant {id} is dead")]
    PlantDead { id: PlantId },

    #[error("Clock skew: now {now} precedes checkpoint {checkpoint}")]
    ClockSkew { now: Timestamp, checkpoint: Timestamp },

    #[error("Plant id space exhausted")]
    CapacityExceeded,

    #[error("Registry lock poisoned")]
    LockPoisoned,
}
