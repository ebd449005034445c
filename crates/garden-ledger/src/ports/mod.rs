//! Ports for the garden ledger.
//!
//! `inbound` is the driving API consumed by the client layer; `outbound`
//! holds the driven dependencies (time supply, fee treasury).

pub mod inbound;
pub mod outbound;

pub use inbound::GardenApi;
pub use outbound::{ManualTimeSource, SystemTimeSource, TimeSource, Treasury, TreasuryError};
