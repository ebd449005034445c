//! # Access Control
//!
//! Authorizes mutating calls against a plant record. Reads require no
//! authorization and never pass through here.

use super::errors::GardenError;
use garden_types::{Address, Plant};

/// Mutating operations subject to authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Owner-only: applies a watering increment.
    Water,
    /// Open to any caller: materializes elapsed time into a checkpoint
    /// without adding any delta.
    Sync,
}

/// Checks that `caller` may perform `operation` on `plant`.
///
/// Policy: only the owner may water (or perform any other operation
/// that adds a delta); a plain checkpoint refresh carries no delta and
/// is open to anyone. Creation never reaches this gate because there is
/// no prior owner to check.
///
/// # Errors
/// - `NotOwner` for an owner-restricted operation by a non-owner
pub fn authorize(plant: &Plant, caller: Address, operation: Operation) -> Result<(), GardenError> {
    match operation {
        Operation::Water => {
            if plant.is_owned_by(caller) {
                Ok(())
            } else {
                Err(GardenError::NotOwner {
                    id: plant.id,
                    caller,
                    owner: plant.owner,
                })
            }
        }
        Operation::Sync => Ok(()),
    }
}
