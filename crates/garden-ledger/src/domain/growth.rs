//! # Growth Engine
//!
//! Computes the **effective state** of a plant: what the record would
//! look like "right now" if decay, death, and stage advancement had been
//! applied continuously since its last checkpoint.
//!
//! The ledger environment has no background scheduler, so time passing
//! is never advanced by a tick. Instead this module reconstructs it
//! analytically at the moment of observation, as a pure function of
//! `(stored plant, config, now)`:
//!
//! - **Deterministic**: same inputs, same output.
//! - **Idempotent**: evaluating the result again at the same `now`
//!   changes nothing.
//! - **Shared**: reads and mutations both go through [`effective_state`],
//!   so a query and the next checkpoint can never disagree.
//!
//! Callers decide persistence: the returned state keeps the input
//! `last_checkpoint`, and only a mutating operation overwrites it with
//! `now` when it commits.

use super::config::GardenConfig;
use super::errors::GardenError;
use garden_types::{Plant, Timestamp, MAX_WATER_LEVEL};

/// Derives the effective state of `plant` at time `now`.
///
/// Evaluation order:
///
/// 1. A dead plant is frozen: returned unchanged.
/// 2. `now` earlier than the stored checkpoint is `ClockSkew`; it is
///    rejected, never clamped, because monotonic decay depends on it.
/// 3. Decay: one water unit drains per `decay_interval_secs` of elapsed
///    time, floored, down to 0.
/// 4. Death: the instant the tank ran dry is reconstructed analytically
///    from the checkpoint (`last_checkpoint + water_level *
///    decay_interval_secs`); once `now` is past that instant by more
///    than the grace period, the plant is dead with its stage frozen at
///    the stored value and water pinned to 0.
/// 5. Stage advancement (live plants only): at most ONE stage per
///    evaluation, gated on both minimum age and minimum effective water.
///    A caller that lets several thresholds pass still sees one step per
///    distinct checkpointed evaluation; transitions stay auditable.
///
/// # Errors
/// - `ClockSkew` if `now < plant.last_checkpoint`
pub fn effective_state(
    plant: &Plant,
    config: &GardenConfig,
    now: Timestamp,
) -> Result<Plant, GardenError> {
    if plant.is_dead {
        return Ok(plant.clone());
    }

    if now < plant.last_checkpoint {
        return Err(GardenError::ClockSkew {
            now,
            checkpoint: plant.last_checkpoint,
        });
    }

    let elapsed = now - plant.last_checkpoint;
    let lost = elapsed / config.decay_interval_secs;
    let water_level = if lost >= u64::from(plant.water_level) {
        0
    } else {
        plant.water_level - lost as u8
    };

    if water_level == 0 {
        let dry_at = dry_instant(plant, config);
        if now > dry_at.saturating_add(config.death_grace_secs) {
            let mut dead = plant.clone();
            dead.water_level = 0;
            dead.is_dead = true;
            return Ok(dead);
        }
    }

    let mut effective = plant.clone();
    effective.water_level = water_level;

    if let Some(next) = plant.stage.next() {
        // planted_date <= last_checkpoint <= now, checked above
        let age = now - plant.planted_date;
        if age >= config.age_threshold(next) && water_level >= config.care_threshold(next) {
            effective.stage = next;
        }
    }

    Ok(effective)
}

/// The instant the stored water level would reach 0, given constant
/// decay since `last_checkpoint`.
///
/// For a plant already checkpointed at 0, this is the checkpoint itself.
pub fn dry_instant(plant: &Plant, config: &GardenConfig) -> Timestamp {
    plant
        .last_checkpoint
        .saturating_add(u64::from(plant.water_level) * config.decay_interval_secs)
}

/// Applies a flat watering increment, capped at the level ceiling.
pub fn watered_level(current: u8, increment: u8) -> u8 {
    current.saturating_add(increment).min(MAX_WATER_LEVEL)
}
