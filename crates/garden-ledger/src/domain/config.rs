//! Garden configuration.
//!
//! All lifecycle tunables in one place. The fee and the growth tables
//! are fixed for the lifetime of a registry; there is no dynamic
//! pricing or per-plant configuration.

use garden_types::{Amount, GrowthStage};

/// Configuration for the garden ledger.
///
/// Controls the creation fee, the decay clock, the death grace period,
/// and the stage-advancement tables.
#[derive(Clone, Debug)]
pub struct GardenConfig {
    /// Fee required to create a plant, in base units.
    pub creation_fee: Amount,

    /// Seconds for one water unit to drain. Must be non-zero.
    /// Default 360: a full tank (100) drains in 10 hours.
    pub decay_interval_secs: u64,

    /// Seconds a plant may sit at water level 0 before it dies.
    pub death_grace_secs: u64,

    /// Flat water raise per watering, capped at the level ceiling.
    pub water_increment: u8,

    /// Minimum age (seconds since planting) to reach
    /// Sprout / Growing / Blooming.
    pub age_thresholds: [u64; 3],

    /// Minimum effective water level to reach
    /// Sprout / Growing / Blooming.
    pub care_thresholds: [u8; 3],
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            creation_fee: 100,
            decay_interval_secs: 360,
            death_grace_secs: 86_400,
            water_increment: 50,
            age_thresholds: [86_400, 259_200, 604_800],
            care_thresholds: [30, 50, 70],
        }
    }
}

impl GardenConfig {
    /// Minimum age required to reach `target`.
    ///
    /// `Seed` has no entry gate (every plant starts there).
    pub fn age_threshold(&self, target: GrowthStage) -> u64 {
        match target {
            GrowthStage::Seed => 0,
            GrowthStage::Sprout => self.age_thresholds[0],
            GrowthStage::Growing => self.age_thresholds[1],
            GrowthStage::Blooming => self.age_thresholds[2],
        }
    }

    /// Minimum effective water level required to reach `target`.
    pub fn care_threshold(&self, target: GrowthStage) -> u8 {
        match target {
            GrowthStage::Seed => 0,
            GrowthStage::Sprout => self.care_thresholds[0],
            GrowthStage::Growing => self.care_thresholds[1],
            GrowthStage::Blooming => self.care_thresholds[2],
        }
    }
}
