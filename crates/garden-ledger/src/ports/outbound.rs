//! Outbound (Driven) ports for the garden ledger.
//!
//! These traits define dependencies on the surrounding environment: the
//! per-call time supply and the external treasury that receives fees.

use async_trait::async_trait;
use garden_types::{Address, Amount, Timestamp};
use thiserror::Error;

/// Time source for consistent timestamp handling.
///
/// Models the environment's guarantee of a monotonically non-decreasing
/// `now` per call. Abstracted to allow testing with deterministic time;
/// domain code never reads a clock directly.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Deterministic time source for tests and simulations.
///
/// Starts at a fixed instant and only moves when told to, so lifecycle
/// scenarios can be replayed exactly.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: std::sync::atomic::AtomicU64,
}

impl ManualTimeSource {
    /// Creates a source pinned at `initial`.
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    /// Advances the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.time
            .fetch_add(secs, std::sync::atomic::Ordering::SeqCst);
    }

    /// Pins the clock to `time`.
    pub fn set(&self, time: Timestamp) {
        self.time.store(time, std::sync::atomic::Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}

// A shared handle to a time source is itself a time source.
impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Errors from the external treasury collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    /// The treasury could not accept or return value.
    #[error("Treasury unavailable: {0}")]
    Unavailable(String),
}

/// External fee-withdrawal collaborator.
///
/// The ledger never holds value itself: collected fees and refunds of
/// overpayment are handed to this port. Implementations are invoked
/// only *after* the corresponding record is fully committed, so a
/// reentrant call triggered by a value transfer can never observe a
/// half-created record.
#[async_trait]
pub trait Treasury: Send + Sync {
    /// Accepts a collected creation fee.
    async fn collect(&self, amount: Amount) -> Result<(), TreasuryError>;

    /// Returns an overpayment excess to `to`.
    async fn refund(&self, to: Address, amount: Amount) -> Result<(), TreasuryError>;
}

// A shared handle to a treasury is itself a treasury.
#[async_trait]
impl<T: Treasury + ?Sized> Treasury for std::sync::Arc<T> {
    async fn collect(&self, amount: Amount) -> Result<(), TreasuryError> {
        (**self).collect(amount).await
    }

    async fn refund(&self, to: Address, amount: Amount) -> Result<(), TreasuryError> {
        (**self).refund(to, amount).await
    }
}
