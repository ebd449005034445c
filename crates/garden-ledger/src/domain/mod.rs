//! Domain layer for the garden ledger.
//!
//! Pure state-machine logic: no I/O, no clocks, no channels. Time enters
//! exclusively as a `now` parameter.

pub mod access;
pub mod config;
pub mod errors;
pub mod growth;
pub mod payment;
pub mod registry;
pub mod value_objects;

pub use access::{authorize, Operation};
pub use config::GardenConfig;
pub use errors::GardenError;
pub use registry::PlantRegistry;
pub use value_objects::{CreateOutcome, WaterOutcome};

// Re-export from garden-types for convenience
pub use garden_types::{Address, Amount, GrowthStage, Plant, PlantId, Timestamp, MAX_WATER_LEVEL};
