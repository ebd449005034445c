//! In-memory Treasury implementation.

use crate::ports::outbound::{Treasury, TreasuryError};
use async_trait::async_trait;
use garden_types::{Address, Amount};
use std::sync::RwLock;

/// In-memory implementation of [`Treasury`] for testing and single-node
/// operation.
///
/// Records every collected fee and every refund so tests can assert the
/// exact value flow of an operation sequence.
#[derive(Debug, Default)]
pub struct RecordingTreasury {
    collected: RwLock<Amount>,
    refunds: RwLock<Vec<(Address, Amount)>>,
}

impl RecordingTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total fees collected so far.
    pub fn collected(&self) -> Amount {
        *self.collected.read().unwrap_or_else(|e| e.into_inner())
    }

    /// All refunds issued so far, in order.
    pub fn refunds(&self) -> Vec<(Address, Amount)> {
        self.refunds
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl Treasury for RecordingTreasury {
    async fn collect(&self, amount: Amount) -> Result<(), TreasuryError> {
        let mut collected = self
            .collected
            .write()
            .map_err(|_| TreasuryError::Unavailable("collected lock poisoned".into()))?;
        *collected += amount;
        Ok(())
    }

    async fn refund(&self, to: Address, amount: Amount) -> Result<(), TreasuryError> {
        let mut refunds = self
            .refunds
            .write()
            .map_err(|_| TreasuryError::Unavailable("refunds lock poisoned".into()))?;
        refunds.push((to, amount));
        Ok(())
    }
}
