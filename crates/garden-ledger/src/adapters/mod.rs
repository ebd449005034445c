//! Adapters implementing the outbound ports.

pub mod treasury;

pub use treasury::RecordingTreasury;
