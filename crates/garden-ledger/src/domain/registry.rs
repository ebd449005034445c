//! # Plant Registry
//!
//! Owns the durable record table and the identifier counter.
//!
//! ## Data Structures
//!
//! - `plants`: BTreeMap keyed by id, so iteration order is id order and
//!   insertion order at once
//! - `next_id`: monotonic counter starting at 1; id 0 is never assigned
//!
//! ## Invariants Enforced
//!
//! - Assigned ids form the contiguous range `1..next_id`, and every id
//!   in that range maps to an existing record
//! - Records are never removed; death is a flag, not a deletion
//! - `checkpoint` is the sole mutation primitive after creation

use super::errors::GardenError;
use garden_types::{Address, Amount, Plant, PlantId, Timestamp};
use std::collections::BTreeMap;

/// The durable plant record set.
///
/// Callers are responsible for validating domain invariants (ownership,
/// payment, liveness, clock order) *before* writing through
/// [`PlantRegistry::checkpoint`]; the registry itself only guards id
/// assignment and existence.
#[derive(Debug)]
pub struct PlantRegistry {
    /// Fee required to create a record, fixed at construction.
    creation_fee: Amount,

    /// All records indexed by id.
    plants: BTreeMap<PlantId, Plant>,

    /// Next id to assign.
    next_id: PlantId,
}

impl PlantRegistry {
    /// Creates an empty registry with the given creation fee.
    pub fn new(creation_fee: Amount) -> Self {
        Self {
            creation_fee,
            plants: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The fixed fee required to create a plant.
    pub fn creation_fee(&self) -> Amount {
        self.creation_fee
    }

    /// The highest assigned id (0 while the registry is empty).
    pub fn plant_count(&self) -> u64 {
        self.next_id - 1
    }

    /// Returns true if no plant has been created yet.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Allocates the next id and inserts a fresh record for `owner`.
    ///
    /// # Errors
    /// - `CapacityExceeded` if the id counter would wrap
    pub fn create(&mut self, owner: Address, now: Timestamp) -> Result<PlantId, GardenError> {
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(GardenError::CapacityExceeded)?;

        self.plants.insert(id, Plant::new(id, owner, now));
        self.next_id = next;
        Ok(id)
    }

    /// Gets the stored record for `id`.
    ///
    /// # Errors
    /// - `PlantNotFound` if `id` was never assigned
    pub fn get(&self, id: PlantId) -> Result<&Plant, GardenError> {
        self.plants.get(&id).ok_or(GardenError::PlantNotFound { id })
    }

    /// Overwrites the stored record for `id` with `new_state`.
    ///
    /// This is the only mutation primitive after creation. The caller
    /// has already validated `new_state` against the domain invariants.
    ///
    /// # Errors
    /// - `PlantNotFound` if `id` was never assigned
    pub fn checkpoint(&mut self, id: PlantId, new_state: Plant) -> Result<(), GardenError> {
        let slot = self
            .plants
            .get_mut(&id)
            .ok_or(GardenError::PlantNotFound { id })?;
        *slot = new_state;
        Ok(())
    }
}
