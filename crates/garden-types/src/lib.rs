//! # Garden Types Crate
//!
//! This crate contains the domain entities shared across the garden-ledger
//! workspace: identifiers, amounts, the growth-stage state machine, and the
//! `Plant` record itself.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Explicit Time**: Nothing in this crate reads a clock. Every
//!   time-dependent computation takes `now` as a parameter so stored state
//!   stays a pure function of its inputs.

pub mod entities;

pub use entities::*;
