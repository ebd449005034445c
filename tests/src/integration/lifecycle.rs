//! # Full Lifecycle Flows
//!
//! Drives the garden service end to end and asserts the exact event
//! choreography observed on the bus: every notification corresponds to
//! a committed checkpoint, in commit order.

#[cfg(test)]
mod tests {
    use crate::integration::{test_garden, T0};
    use garden_bus::{EventFilter, GardenEvent};
    use garden_ledger::{GardenApi, GardenError};
    use garden_types::GrowthStage;
    use std::time::Duration;
    use tokio::time::timeout;

    const ALICE: [u8; 20] = [0xAA; 20];
    const BOB: [u8; 20] = [0xBB; 20];

    async fn next_event(sub: &mut garden_bus::Subscription) -> GardenEvent {
        timeout(Duration::from_millis(100), sub.recv())
            .await
            .expect("timed out waiting for event")
            .expect("bus closed")
    }

    /// Seed to bloom to compost, with the event stream checked at every
    /// transition.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_seed_to_bloom_to_compost() {
        let garden = test_garden();
        let mut sub = garden.bus.subscribe(EventFilter::all());
        let service = &garden.service;

        // Day 0: pay the fee, get id 1
        let created = service.create_plant(ALICE, 100).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::PlantCreated { id: 1, owner: ALICE }
        );

        // Day 1: old enough to sprout; watering tops up and advances
        garden.time.set(T0 + 86_400);
        let outcome = service.water_plant(ALICE, 1).await.unwrap();
        assert_eq!(outcome.stage, GrowthStage::Sprout);
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::PlantWatered {
                id: 1,
                water_level: 100,
            }
        );
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::StageAdvanced {
                id: 1,
                stage: GrowthStage::Sprout,
            }
        );

        // Day 3: two days of decay leave 52 water, just enough care
        garden.time.set(T0 + 259_200);
        let outcome = service.water_plant(ALICE, 1).await.unwrap();
        assert_eq!(outcome.stage, GrowthStage::Growing);
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::PlantWatered {
                id: 1,
                water_level: 100,
            }
        );
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::StageAdvanced {
                id: 1,
                stage: GrowthStage::Growing,
            }
        );

        // Day 7: four days unattended, down to 4 water; too parched to
        // bloom at the moment of evaluation, so only the top-up lands
        garden.time.set(T0 + 604_800);
        let outcome = service.water_plant(ALICE, 1).await.unwrap();
        assert_eq!(outcome.stage, GrowthStage::Growing);
        assert_eq!(outcome.water_level, 54);
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::PlantWatered {
                id: 1,
                water_level: 54,
            }
        );

        // An hour later: top up again toward full
        garden.time.advance(3_600);
        let outcome = service.water_plant(ALICE, 1).await.unwrap();
        assert_eq!(outcome.water_level, 100);
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::PlantWatered {
                id: 1,
                water_level: 100,
            }
        );

        // Another hour: now well-watered at evaluation time, the sync
        // materializes the bloom
        garden.time.advance(3_600);
        let synced = service.sync_plant(1).await.unwrap();
        assert_eq!(synced.stage, GrowthStage::Blooming);
        assert_eq!(synced.water_level, 99);
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::StageAdvanced {
                id: 1,
                stage: GrowthStage::Blooming,
            }
        );

        // Abandoned: the tank runs dry, the grace period lapses, and the
        // next sync commits the death
        garden.time.advance(99 * 3_600 + 86_400 + 1);
        let synced = service.sync_plant(1).await.unwrap();
        assert!(synced.is_dead);
        assert_eq!(next_event(&mut sub).await, GardenEvent::PlantDied { id: 1 });

        // Frozen forever: stage kept, water pinned at zero
        let plant = service.get_plant(1).unwrap();
        assert!(plant.is_dead);
        assert_eq!(plant.stage, GrowthStage::Blooming);
        assert_eq!(plant.water_level, 0);

        // And watering the corpse is rejected without a trace
        let err = service.water_plant(ALICE, 1).await.unwrap_err();
        assert_eq!(err, GardenError::PlantDead { id: 1 });

        // One creation fee collected over the whole flow
        assert_eq!(garden.treasury.collected(), 100);
    }

    /// Per-plant subscriptions only see their own plant's events.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_per_plant_event_filtering() {
        let garden = test_garden();
        let service = &garden.service;

        let mut sub = garden.bus.subscribe(EventFilter::plants(vec![2]));

        service.create_plant(ALICE, 100).await.unwrap();
        service.create_plant(BOB, 100).await.unwrap();

        garden.time.advance(3_600);
        service.water_plant(ALICE, 1).await.unwrap();
        service.water_plant(BOB, 2).await.unwrap();

        // Only plant 2's creation and watering come through
        assert_eq!(
            next_event(&mut sub).await,
            GardenEvent::PlantCreated { id: 2, owner: BOB }
        );
        assert!(matches!(
            next_event(&mut sub).await,
            GardenEvent::PlantWatered { id: 2, .. }
        ));
        assert!(matches!(sub.try_recv(), Ok(None)));
    }

    /// A rejected creation leaves no trace anywhere: no record, no fee,
    /// no events.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_rejected_creation_leaves_no_trace() {
        let garden = test_garden();
        let service = &garden.service;
        let mut sub = garden.bus.subscribe(EventFilter::all());

        let err = service.create_plant(ALICE, 10).await.unwrap_err();
        assert_eq!(
            err,
            GardenError::InsufficientPayment {
                sent: 10,
                required: 100,
            }
        );

        assert_eq!(service.plant_count().unwrap(), 0);
        assert_eq!(garden.treasury.collected(), 0);
        assert!(matches!(sub.try_recv(), Ok(None)));
    }

    /// The client-facing snapshot carries the full record shape.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_snapshot_shape_for_clients() {
        let garden = test_garden();
        garden.service.create_plant(ALICE, 100).await.unwrap();

        let plant = garden.service.get_plant(1).unwrap();
        let json = serde_json::to_value(&plant).unwrap();

        for field in [
            "id",
            "owner",
            "stage",
            "planted_date",
            "last_checkpoint",
            "water_level",
            "exists",
            "is_dead",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["id"], 1);
        assert_eq!(json["stage"], "Seed");
        assert_eq!(json["water_level"], 100);
    }
}
