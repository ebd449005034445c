//! # garden-ledger
//!
//! Plant lifecycle ledger: fee-gated creation of uniquely owned plant
//! records that decay, grow, and die on a lazily recomputed clock.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Authoritative record set for all plants
//! - **Lazy Time Model**: The environment has no scheduler, so elapsed
//!   time is reconstructed analytically at every access by the growth
//!   engine; reads and writes share one pure derivation and can never
//!   disagree
//! - **Choreography Participant**: Publishes `PlantCreated`,
//!   `PlantWatered`, `StageAdvanced`, and `PlantDied` to the garden bus
//!   after each committed checkpoint
//!
//! ## Operation Flow
//!
//! ```text
//! [Caller] ──create/water/sync/get──→ [GardenService]
//!                                          │
//!                validate (payment, ownership, liveness)
//!                                          │
//!                derive effective state (GrowthEngine)
//!                                          │
//!                checkpoint (PlantRegistry) ──commit──→ [Garden Bus]
//! ```
//!
//! Every rejected call leaves the registry exactly as it was; events
//! reflect only committed state.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::*;
