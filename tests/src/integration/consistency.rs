//! # Read/Write Agreement
//!
//! The growth engine is the single derivation shared by queries and
//! mutations, so a read must always predict exactly what the next
//! checkpoint will persist. These flows pin that property across the
//! whole lifecycle, including the death transition.

#[cfg(test)]
mod tests {
    use crate::integration::{test_garden, T0};
    use garden_ledger::GardenApi;
    use garden_types::GrowthStage;

    const ALICE: [u8; 20] = [0xAA; 20];

    /// Offsets spanning quiet decay, stage boundaries, the dry instant,
    /// the grace window, and well past death.
    const OFFSETS: [u64; 8] = [
        0,
        3_599,
        86_400,          // sprout age
        259_200,         // growing age
        360_000,         // analytic dry instant (100 units/hour tank)
        360_000 + 86_399, // one second inside the grace window
        360_000 + 86_401, // one second past it
        2_000_000,
    ];

    /// What a read reports is byte-for-byte what the next mutating call
    /// checkpoints, at every point in the lifecycle.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_read_predicts_next_checkpoint() {
        for offset in OFFSETS {
            let garden = test_garden();
            garden.service.create_plant(ALICE, 100).await.unwrap();
            garden.time.set(T0 + offset);

            let read = garden.service.get_plant(1).unwrap();
            let synced = garden.service.sync_plant(1).await.unwrap();

            assert_eq!(synced.stage, read.stage, "stage diverged at +{offset}");
            assert_eq!(
                synced.water_level, read.water_level,
                "water diverged at +{offset}"
            );
            assert_eq!(synced.is_dead, read.is_dead, "death diverged at +{offset}");
            assert_eq!(synced.owner, read.owner);
            assert_eq!(synced.planted_date, read.planted_date);
        }
    }

    /// Repeated reads at a fixed instant are identical.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_repeated_reads_are_stable() {
        for offset in OFFSETS {
            let garden = test_garden();
            garden.service.create_plant(ALICE, 100).await.unwrap();
            garden.time.set(T0 + offset);

            let first = garden.service.get_plant(1).unwrap();
            let second = garden.service.get_plant(1).unwrap();
            assert_eq!(first, second, "reads diverged at +{offset}");
        }
    }

    /// Syncing twice at the same instant commits the same state and the
    /// second pass changes nothing.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_sync_is_idempotent() {
        for offset in OFFSETS {
            let garden = test_garden();
            garden.service.create_plant(ALICE, 100).await.unwrap();
            garden.time.set(T0 + offset);

            let first = garden.service.sync_plant(1).await.unwrap();
            let second = garden.service.sync_plant(1).await.unwrap();
            assert_eq!(first, second, "sync diverged at +{offset}");
        }
    }

    /// Observed water never rises and death never reverts as time moves
    /// forward with no intervening care.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_observation_is_monotone() {
        let garden = test_garden();
        garden.service.create_plant(ALICE, 100).await.unwrap();

        let mut last_water = u8::MAX;
        let mut seen_dead = false;
        for offset in OFFSETS {
            garden.time.set(T0 + offset);
            let plant = garden.service.get_plant(1).unwrap();

            assert!(plant.water_level <= last_water);
            last_water = plant.water_level;

            if seen_dead {
                assert!(plant.is_dead);
                assert_eq!(plant.water_level, 0);
            }
            seen_dead = plant.is_dead;
        }
        assert!(seen_dead, "plant should have died by the last offset");
    }

    /// Death discovered by a read and death committed by a sync agree on
    /// the frozen stage.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_death_freeze_agrees_across_paths() {
        // Grow to sprout first so the frozen stage is not the default
        let garden = test_garden();
        garden.service.create_plant(ALICE, 100).await.unwrap();
        garden.time.set(T0 + 86_400);
        garden.service.water_plant(ALICE, 1).await.unwrap();

        // Let it die
        garden.time.advance(100 * 3_600 + 86_400 + 1);

        let read = garden.service.get_plant(1).unwrap();
        assert!(read.is_dead);
        assert_eq!(read.stage, GrowthStage::Sprout);

        let synced = garden.service.sync_plant(1).await.unwrap();
        assert_eq!(synced.stage, read.stage);
        assert_eq!(synced.water_level, 0);

        // Long after, the committed record still reads frozen
        garden.time.advance(10 * 86_400);
        let later = garden.service.get_plant(1).unwrap();
        assert_eq!(later.stage, GrowthStage::Sprout);
        assert_eq!(later.water_level, 0);
        assert!(later.is_dead);
    }
}
