//! # Inbound Port - GardenApi
//!
//! Primary driving port exposing the garden operations consumed by the
//! client layer.
//!
//! ## Authorization
//!
//! | Method | Authorized Caller |
//! |--------|-------------------|
//! | `create_plant` | anyone paying the fee (caller becomes owner) |
//! | `water_plant` | record owner only |
//! | `sync_plant` | anyone (no delta, only materializes time) |
//! | `get_plant`, `plant_count`, `creation_fee` | anyone (read-only) |

use crate::domain::{Amount, CreateOutcome, GardenError, Plant, PlantId, WaterOutcome};
use async_trait::async_trait;
use garden_types::Address;

/// Primary API for the garden ledger.
///
/// Mutating operations follow a strict validate-then-commit discipline:
/// every check runs before the checkpoint, a rejected call leaves the
/// registry untouched, and notifications are published only after the
/// checkpoint commits.
///
/// # Example
///
/// ```rust,ignore
/// use garden_ledger::ports::GardenApi;
///
/// async fn example(garden: &impl GardenApi, me: [u8; 20]) {
///     let fee = garden.creation_fee();
///     let created = garden.create_plant(me, fee).await.unwrap();
///
///     // Later: keep it alive and observe it
///     garden.water_plant(me, created.id).await.unwrap();
///     let plant = garden.get_plant(created.id).unwrap();
///     assert!(!plant.is_dead);
/// }
/// ```
#[async_trait]
pub trait GardenApi: Send + Sync {
    /// The highest assigned plant id (0 before any creation).
    fn plant_count(&self) -> Result<u64, GardenError>;

    /// The fixed fee required to create a plant.
    fn creation_fee(&self) -> Amount;

    /// Creates a plant owned by `owner`, paying `amount_sent`.
    ///
    /// The payment gate runs before any state change; the treasury
    /// transfer and the refund of any excess happen only after the
    /// record is fully committed. Emits `PlantCreated`.
    ///
    /// # Errors
    /// - `InsufficientPayment`: `amount_sent` below the creation fee
    /// - `CapacityExceeded`: id space exhausted
    async fn create_plant(
        &self,
        owner: Address,
        amount_sent: Amount,
    ) -> Result<CreateOutcome, GardenError>;

    /// Waters plant `id`, raising its effective water level by the
    /// configured increment (capped) and checkpointing the result.
    ///
    /// Emits `PlantWatered`, plus `StageAdvanced` if the recomputation
    /// crossed a stage boundary.
    ///
    /// # Errors
    /// - `PlantNotFound`: unknown id
    /// - `NotOwner`: caller does not own the record
    /// - `PlantDead`: the plant is (effectively) dead; nothing is persisted
    /// - `ClockSkew`: supplied time precedes the stored checkpoint
    async fn water_plant(&self, caller: Address, id: PlantId) -> Result<WaterOutcome, GardenError>;

    /// Re-derives plant `id`'s effective state and checkpoints it
    /// verbatim, materializing elapsed time into storage.
    ///
    /// This is the call that persists lazily discovered transitions:
    /// it emits `StageAdvanced` when a stage boundary was crossed and
    /// `PlantDied` when the death transition is first committed. A plant
    /// already checkpointed dead is returned frozen, with no new
    /// checkpoint and no events.
    ///
    /// # Errors
    /// - `PlantNotFound`: unknown id
    /// - `ClockSkew`: supplied time precedes the stored checkpoint
    async fn sync_plant(&self, id: PlantId) -> Result<Plant, GardenError>;

    /// Returns the effective state of plant `id` without persisting it.
    ///
    /// The result is exactly what the next mutating call would
    /// checkpoint, given no other call intervenes.
    ///
    /// # Errors
    /// - `PlantNotFound`: unknown id
    /// - `ClockSkew`: supplied time precedes the stored checkpoint
    fn get_plant(&self, id: PlantId) -> Result<Plant, GardenError>;
}
