//! # Garden Bus - Event Bus for Garden Notifications
//!
//! Carries one notification per observable plant transition to off-ledger
//! consumers (indexers, frontends, monitors).
//!
//! ## Delivery Contract
//!
//! - Events are published only **after** the corresponding registry
//!   checkpoint has committed, never before. Subscribers therefore only
//!   ever observe committed state.
//! - Rejected operations publish nothing.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ GardenService│                    │  Subscriber  │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, GardenEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
