//! # Garden-Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/       # Cross-crate choreography
//!     ├── lifecycle.rs   # Create -> water -> grow -> die flows
//!     └── consistency.rs # Read/write agreement properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p garden-tests
//!
//! # By category
//! cargo test -p garden-tests integration::
//! ```

#![allow(dead_code)]
