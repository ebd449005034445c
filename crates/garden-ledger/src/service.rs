//! # Garden Service
//!
//! Application service layer that implements the `GardenApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`GardenApi`)
//! - Uses the outbound ports (`TimeSource`, `Treasury`)
//! - Delegates all state derivation to the domain layer
//! - Publishes to the garden bus only after a checkpoint commits
//!
//! ## Discipline
//!
//! Mutating operations hold the registry write lock for their full
//! validate-then-commit span, which is what serializes them into a
//! strict total order. Value transfers and event publication happen
//! after the lock is released: a reentrant call triggered by either can
//! only ever observe fully committed records.

use crate::domain::{access, growth, payment};
use crate::domain::{
    Address, Amount, CreateOutcome, GardenConfig, GardenError, Plant, PlantId, PlantRegistry,
    WaterOutcome,
};
use crate::ports::inbound::GardenApi;
use crate::ports::outbound::{TimeSource, Treasury};
use async_trait::async_trait;
use garden_bus::{EventPublisher, GardenEvent};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Garden ledger service.
///
/// Owns the registry and wires the domain gates, the growth engine, the
/// treasury, and the bus into the externally exposed operations.
pub struct GardenService<T: Treasury, S: TimeSource> {
    registry: RwLock<PlantRegistry>,
    config: GardenConfig,
    time: S,
    treasury: T,
    bus: Arc<dyn EventPublisher>,
}

impl<T: Treasury, S: TimeSource> GardenService<T, S> {
    /// Creates a service with an empty registry.
    ///
    /// # Arguments
    /// * `config` - lifecycle tunables; the creation fee is fixed here
    /// * `time` - the environment's time supply
    /// * `treasury` - external fee collaborator, called only post-commit
    /// * `bus` - event bus for committed-state notifications
    pub fn new(config: GardenConfig, time: S, treasury: T, bus: Arc<dyn EventPublisher>) -> Self {
        let registry = RwLock::new(PlantRegistry::new(config.creation_fee));
        Self {
            registry,
            config,
            time,
            treasury,
            bus,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GardenConfig {
        &self.config
    }
}

#[async_trait]
impl<T: Treasury, S: TimeSource> GardenApi for GardenService<T, S> {
    fn plant_count(&self) -> Result<u64, GardenError> {
        let registry = self.registry.read().map_err(|_| GardenError::LockPoisoned)?;
        Ok(registry.plant_count())
    }

    fn creation_fee(&self) -> Amount {
        self.config.creation_fee
    }

    async fn create_plant(
        &self,
        owner: Address,
        amount_sent: Amount,
    ) -> Result<CreateOutcome, GardenError> {
        // Reject-before-effect: the payment gate runs before anything
        // is touched.
        let refund = payment::validate(amount_sent, self.config.creation_fee)?;
        let now = self.time.now();

        let id = {
            let mut registry = self
                .registry
                .write()
                .map_err(|_| GardenError::LockPoisoned)?;
            registry.create(owner, now)?
        };

        info!(id, owner = ?owner, "Plant created");

        // Value transfer runs after commit; failures are logged, never
        // unwound.
        if let Err(e) = self.treasury.collect(self.config.creation_fee).await {
            warn!(id, error = %e, "Fee collection failed");
        }
        if refund > 0 {
            if let Err(e) = self.treasury.refund(owner, refund).await {
                warn!(id, refund, error = %e, "Refund failed");
            }
        }

        self.bus.publish(GardenEvent::PlantCreated { id, owner }).await;

        Ok(CreateOutcome { id, refund })
    }

    async fn water_plant(&self, caller: Address, id: PlantId) -> Result<WaterOutcome, GardenError> {
        let now = self.time.now();

        let (watered, crossed) = {
            let mut registry = self
                .registry
                .write()
                .map_err(|_| GardenError::LockPoisoned)?;

            let stored = registry.get(id)?.clone();
            access::authorize(&stored, caller, access::Operation::Water)?;

            let effective = growth::effective_state(&stored, &self.config, now)?;
            if effective.is_dead {
                // Rejected outright; the death itself is only ever
                // persisted by sync_plant.
                return Err(GardenError::PlantDead { id });
            }

            let mut watered = effective;
            watered.water_level =
                growth::watered_level(watered.water_level, self.config.water_increment);
            watered.last_checkpoint = now;
            registry.checkpoint(id, watered.clone())?;

            let crossed = (watered.stage != stored.stage).then_some(watered.stage);
            (watered, crossed)
        };

        debug!(id, water_level = watered.water_level, "Plant watered");

        self.bus
            .publish(GardenEvent::PlantWatered {
                id,
                water_level: watered.water_level,
            })
            .await;
        if let Some(stage) = crossed {
            info!(id, stage = ?stage, "Stage advanced");
            self.bus.publish(GardenEvent::StageAdvanced { id, stage }).await;
        }

        Ok(WaterOutcome {
            water_level: watered.water_level,
            stage: watered.stage,
        })
    }

    async fn sync_plant(&self, id: PlantId) -> Result<Plant, GardenError> {
        let now = self.time.now();

        let (synced, died, crossed) = {
            let mut registry = self
                .registry
                .write()
                .map_err(|_| GardenError::LockPoisoned)?;

            let stored = registry.get(id)?.clone();
            if stored.is_dead {
                // Already frozen; nothing to materialize.
                return Ok(stored);
            }

            let mut synced = growth::effective_state(&stored, &self.config, now)?;
            synced.last_checkpoint = now;
            registry.checkpoint(id, synced.clone())?;

            let died = synced.is_dead;
            let crossed = (!died && synced.stage != stored.stage).then_some(synced.stage);
            (synced, died, crossed)
        };

        if died {
            info!(id, "Plant died");
            self.bus.publish(GardenEvent::PlantDied { id }).await;
        } else if let Some(stage) = crossed {
            info!(id, stage = ?stage, "Stage advanced");
            self.bus.publish(GardenEvent::StageAdvanced { id, stage }).await;
        }

        Ok(synced)
    }

    fn get_plant(&self, id: PlantId) -> Result<Plant, GardenError> {
        let now = self.time.now();
        let registry = self.registry.read().map_err(|_| GardenError::LockPoisoned)?;

        let stored = registry.get(id)?;
        growth::effective_state(stored, &self.config, now)
    }
}
