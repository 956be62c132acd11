//! The in-memory query cache.
//!
//! A content-addressed map from typed query keys to possibly-stale JSON
//! snapshots of backend responses. Every key belongs to a topic; mutations
//! invalidate whole topics rather than enumerating keys, so a component may
//! invalidate entries it does not own. Last write wins on overlapping
//! refetches.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Invalidation topic a query key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Appointments,
    Patients,
    Treatments,
    TreatmentCycles,
    MedicalRecords,
    Agreements,
    Transactions,
    Catalogues,
}

/// Typed composite key for one cached query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Appointments { page: u32 },
    Appointment { id: Uuid },
    Patients { page: u32 },
    Patient { id: Uuid },
    Treatments { page: u32 },
    TreatmentCycle { id: Uuid },
    CycleCurrentStep { id: Uuid },
    MedicalRecords { patient_id: Uuid, page: u32 },
    MedicalRecord { id: Uuid },
    Agreement { cycle_id: Uuid },
    Transactions { page: u32 },
    Transaction { id: Uuid },
    Medicines { page: u32 },
    Services { page: u32 },
}

impl QueryKey {
    /// The topic whose invalidation clears this key.
    pub fn topic(&self) -> Topic {
        match self {
            QueryKey::Appointments { .. } | QueryKey::Appointment { .. } => Topic::Appointments,
            QueryKey::Patients { .. } | QueryKey::Patient { .. } => Topic::Patients,
            QueryKey::Treatments { .. } => Topic::Treatments,
            QueryKey::TreatmentCycle { .. } | QueryKey::CycleCurrentStep { .. } => {
                Topic::TreatmentCycles
            }
            QueryKey::MedicalRecords { .. } | QueryKey::MedicalRecord { .. } => {
                Topic::MedicalRecords
            }
            QueryKey::Agreement { .. } => Topic::Agreements,
            QueryKey::Transactions { .. } | QueryKey::Transaction { .. } => Topic::Transactions,
            QueryKey::Medicines { .. } | QueryKey::Services { .. } => Topic::Catalogues,
        }
    }
}

/// Shared snapshot cache keyed by [`QueryKey`].
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, serde_json::Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and re-type a cached snapshot, if present.
    ///
    /// A snapshot that no longer decodes as `T` is dropped and treated as a
    /// miss rather than surfaced as an error.
    pub fn get_as<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read().ok()?;
        let value = entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(typed) => Some(typed),
            Err(err) => {
                tracing::warn!("dropping cache snapshot for {key:?}: {err}");
                drop(entries);
                self.invalidate_key(key);
                None
            }
        }
    }

    /// Store a snapshot for a key, replacing any previous one.
    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T) {
        let snapshot = match serde_json::to_value(value) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("refusing to cache unserializable snapshot for {key:?}: {err}");
                return;
            }
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, snapshot);
        }
    }

    /// Drop every key belonging to the topic. Returns how many were dropped.
    pub fn invalidate_topic(&self, topic: Topic) -> usize {
        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|key, _| key.topic() != topic);
        before - entries.len()
    }

    /// Drop a single key.
    pub fn invalidate_key(&self, key: &QueryKey) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Snapshot {
        value: u32,
    }

    fn cycle_key() -> QueryKey {
        QueryKey::TreatmentCycle { id: Uuid::nil() }
    }

    #[test]
    fn put_then_get_round_trips_the_snapshot() {
        let cache = QueryCache::new();
        cache.put(cycle_key(), &Snapshot { value: 7 });

        let hit: Snapshot = cache.get_as(&cycle_key()).expect("snapshot should be cached");
        assert_eq!(hit, Snapshot { value: 7 });
    }

    #[test]
    fn last_write_wins_for_the_same_key() {
        let cache = QueryCache::new();
        cache.put(cycle_key(), &Snapshot { value: 1 });
        cache.put(cycle_key(), &Snapshot { value: 2 });

        let hit: Snapshot = cache.get_as(&cycle_key()).expect("snapshot should be cached");
        assert_eq!(hit.value, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn topic_invalidation_drops_only_that_topic() {
        let cache = QueryCache::new();
        cache.put(cycle_key(), &Snapshot { value: 1 });
        cache.put(
            QueryKey::CycleCurrentStep { id: Uuid::nil() },
            &Snapshot { value: 2 },
        );
        cache.put(QueryKey::Transactions { page: 1 }, &Snapshot { value: 3 });

        let dropped = cache.invalidate_topic(Topic::TreatmentCycles);
        assert_eq!(dropped, 2);
        assert!(cache.get_as::<Snapshot>(&cycle_key()).is_none());
        assert!(cache
            .get_as::<Snapshot>(&QueryKey::Transactions { page: 1 })
            .is_some());
    }

    #[test]
    fn distinct_pages_are_distinct_keys() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Appointments { page: 1 }, &Snapshot { value: 1 });
        cache.put(QueryKey::Appointments { page: 2 }, &Snapshot { value: 2 });
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn undecodable_snapshot_is_a_miss_and_gets_dropped() {
        let cache = QueryCache::new();
        cache.put(cycle_key(), &Snapshot { value: 1 });

        #[derive(Debug, Deserialize)]
        struct OtherShape {
            #[allow(dead_code)]
            name: String,
        }

        assert!(cache.get_as::<OtherShape>(&cycle_key()).is_none());
        assert!(cache.is_empty());
    }
}
