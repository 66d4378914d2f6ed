//! # Admission Store Under Contention
//!
//! Exercises the admission store from many OS threads at once:
//!
//! 1. **Dedup under race**: N callers, one identity, one entry
//! 2. **Capacity enforcement**: the (K+1)-th distinct identity is always `Full`
//! 3. **Position density**: positions are exactly `1..=len` after any interleaving

#[cfg(test)]
mod tests {
    use futures::future::join_all;
    use rand::seq::SliceRandom;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use wg_01_admission::domain::invariants::{
        invariant_capacity, invariant_dense_positions, invariant_unique_index,
    };
    use wg_01_admission::{
        normalize, Admission, AdmissionError, AdmissionStore, Identity, InMemoryAdmissionStore,
        Metadata,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn id(raw: &str) -> Identity {
        normalize(raw).unwrap()
    }

    async fn admit_all(
        store: &Arc<InMemoryAdmissionStore>,
        identities: Vec<Identity>,
        capacity: u64,
    ) -> Vec<Result<Admission, AdmissionError>> {
        let handles = identities.into_iter().map(|identity| {
            let store = Arc::clone(store);
            tokio::spawn(async move {
                store
                    .enqueue_or_lookup(identity, Metadata::new(), capacity)
                    .await
            })
        });

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect()
    }

    // =============================================================================
    // DEDUP UNDER RACE
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_same_identity_race_yields_one_entry() {
        const N: usize = 64;
        let store = Arc::new(InMemoryAdmissionStore::default());

        let results = admit_all(&store, vec![id("race@x.com"); N], 1_000).await;
        let admissions: Vec<Admission> = results.into_iter().map(|r| r.unwrap()).collect();

        let first = admissions[0];
        assert!(admissions.iter().all(|a| a.entry_id == first.entry_id));
        assert!(admissions.iter().all(|a| a.position == 1));
        assert_eq!(admissions.iter().filter(|a| a.already_existed).count(), N - 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_equivalent_raw_forms_race_to_one_entry() {
        let store = Arc::new(InMemoryAdmissionStore::default());
        let forms = [
            "+1 415 555 2671",
            "+1-415-555-2671",
            "+1 (415) 555.2671",
            "0014155552671",
        ];
        let identities = forms.iter().cycle().take(40).map(|raw| id(raw)).collect();

        let results = admit_all(&store, identities, 10).await;

        assert!(results.iter().all(|r| r.as_ref().unwrap().position == 1));
        assert_eq!(store.len(), 1);
    }

    // =============================================================================
    // CAPACITY ENFORCEMENT
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_last_slot_race_never_exceeds_capacity() {
        const K: u64 = 10;
        for _round in 0..20 {
            let store = Arc::new(InMemoryAdmissionStore::default());
            let mut identities: Vec<Identity> =
                (0..50).map(|i| id(&format!("user{i}@x.com"))).collect();
            identities.shuffle(&mut rand::thread_rng());

            let results = admit_all(&store, identities, K).await;

            let admitted = results.iter().filter(|r| r.is_ok()).count();
            let full = results
                .iter()
                .filter(|r| matches!(r, Err(AdmissionError::Full { capacity: K })))
                .count();
            assert_eq!(admitted as u64, K);
            assert_eq!(full, 50 - K as usize);

            let snapshot = store.snapshot();
            assert!(invariant_capacity(snapshot.len(), K).is_ok());
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_full_store_still_confirms_existing() {
        let store = Arc::new(InMemoryAdmissionStore::default());
        admit_all(&store, vec![id("a@x.com"), id("b@x.com")], 2).await;

        let again = vec![id("a@x.com"), id("c@x.com"), id("b@x.com")];
        let results = admit_all(&store, again, 2).await;

        assert!(results[0].as_ref().unwrap().already_existed);
        assert_eq!(results[1], Err(AdmissionError::Full { capacity: 2 }));
        assert!(results[2].as_ref().unwrap().already_existed);
        assert_eq!(store.len(), 2);
    }

    // =============================================================================
    // POSITION DENSITY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_positions_dense_under_mixed_contention() {
        let store = Arc::new(InMemoryAdmissionStore::default());
        let mut identities: Vec<Identity> = (0..200)
            .map(|i| id(&format!("user{}@x.com", i % 75)))
            .collect();
        identities.shuffle(&mut rand::thread_rng());

        let results = admit_all(&store, identities, 60).await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 60);
        assert!(invariant_dense_positions(&snapshot).is_ok());
        assert!(invariant_unique_index(&snapshot).is_ok());

        let positions: BTreeSet<u64> = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|a| a.position)
            .collect();
        assert_eq!(positions, (1..=60).collect::<BTreeSet<u64>>());

        for entry in &snapshot {
            assert_eq!(store.position_of(&entry.identity).await, entry.position);
            assert_eq!(store.position_of_entry(&entry.entry_id).await, entry.position);
        }
    }

    #[tokio::test]
    async fn test_scenario_a_capacity_two() {
        let store = Arc::new(InMemoryAdmissionStore::default());

        let a = store.enqueue_or_lookup(id("a@x.com"), Metadata::new(), 2).await;
        let b = store.enqueue_or_lookup(id("b@x.com"), Metadata::new(), 2).await;
        let c = store.enqueue_or_lookup(id("c@x.com"), Metadata::new(), 2).await;

        assert_eq!(a.unwrap().position, 1);
        assert_eq!(b.unwrap().position, 2);
        assert_eq!(c, Err(AdmissionError::Full { capacity: 2 }));
        assert!(!store.exists(&id("c@x.com")).await);
    }
}
