// src/shared/cache.rs

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::broadcast;

pub type CachedValue = Arc<dyn Any + Send + Sync>;
type InFlight = Shared<BoxFuture<'static, Result<CachedValue, String>>>;

const EVENT_CAPACITY: usize = 64;

//
// ──────────────────────────────────────────────────────────
// Keys & events
// ──────────────────────────────────────────────────────────
//

/// Canonical cache key: an entity name plus an optional filter
/// (e.g. `resources` + `study_material`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    entity: &'static str,
    filter: Option<String>,
}

impl QueryKey {
    pub fn entity(entity: &'static str) -> Self {
        Self {
            entity,
            filter: None,
        }
    }

    pub fn filtered(entity: &'static str, filter: impl Into<String>) -> Self {
        Self {
            entity,
            filter: Some(filter.into()),
        }
    }

    /// An unfiltered key matches every key of the same entity.
    fn matches(&self, other: &QueryKey) -> bool {
        self.entity == other.entity && (self.filter.is_none() || self.filter == other.filter)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "{}:{}", self.entity, filter),
            None => write!(f, "{}", self.entity),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheEvent {
    Loaded { key: QueryKey, at: DateTime<Utc> },
    Failed { key: QueryKey, error: String },
    Invalidated { key: QueryKey },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("{0}")]
    Fetch(String),

    #[error("cached value for '{0}' has an unexpected type")]
    TypeMismatch(String),
}

//
// ──────────────────────────────────────────────────────────
// Cache
// ──────────────────────────────────────────────────────────
//

/// Point-in-time view of one key.
#[derive(Debug, Clone)]
pub struct QuerySnapshot {
    pub data: Option<CachedValue>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub stale: bool,
}

impl QuerySnapshot {
    /// `None` when nothing is cached or the value has another type.
    pub fn data_as<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.data.clone().and_then(|value| value.downcast::<T>().ok())
    }
}

#[derive(Default)]
struct Entry {
    data: Option<CachedValue>,
    error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
    stale: bool,
    generation: u64,
    in_flight: Option<InFlight>,
}

/// Process-wide query cache shared by every handler.
///
/// - fresh data is served without touching the store
/// - concurrent reads of the same key share one request
/// - `invalidate` marks entries stale; the next read refetches
/// - failures are recorded and returned, never retried here
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    events: broadcast::Sender<CacheEvent>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Mutex::new(HashMap::new()),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }

    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>, CacheError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, String>> + Send + 'static,
    {
        let (request, generation) = {
            let mut entries = self.lock();
            let entry = entries.entry(key.clone()).or_default();

            match (&entry.in_flight, &entry.data) {
                (Some(in_flight), _) => (in_flight.clone(), entry.generation),
                (None, Some(data)) if !entry.stale => return downcast(&key, Arc::clone(data)),
                (None, _) => {
                    let request = fetcher()
                        .map(|res| res.map(|value| Arc::new(value) as CachedValue))
                        .boxed()
                        .shared();
                    entry.in_flight = Some(request.clone());
                    (request, entry.generation)
                }
            }
        };

        let outcome = request.await;
        self.settle(&key, generation, &outcome);

        match outcome {
            Ok(value) => downcast(&key, value),
            Err(e) => Err(CacheError::Fetch(e)),
        }
    }

    /// Last known data is kept through later failures and invalidations.
    pub fn snapshot(&self, key: &QueryKey) -> Option<QuerySnapshot> {
        let entries = self.lock();
        entries.get(key).map(|entry| QuerySnapshot {
            data: entry.data.clone(),
            loading: entry.in_flight.is_some(),
            error: entry.error.clone(),
            last_updated: entry.last_updated,
            stale: entry.stale,
        })
    }

    /// Marks every entry matched by `key` as stale. Requests already in flight
    /// still answer their callers but no longer populate the entry.
    pub fn invalidate(&self, key: &QueryKey) {
        let invalidated: Vec<QueryKey> = {
            let mut entries = self.lock();
            entries
                .iter_mut()
                .filter(|(k, _)| key.matches(k))
                .map(|(k, entry)| {
                    entry.stale = true;
                    entry.generation += 1;
                    entry.in_flight = None;
                    k.clone()
                })
                .collect()
        };

        for key in invalidated {
            let _ = self.events.send(CacheEvent::Invalidated { key });
        }
    }

    /// First caller to observe the outcome records it; later callers find
    /// nothing in flight and leave the entry alone.
    fn settle(&self, key: &QueryKey, generation: u64, outcome: &Result<CachedValue, String>) {
        let event = {
            let mut entries = self.lock();
            let Some(entry) = entries.get_mut(key) else {
                return;
            };
            if entry.generation != generation || entry.in_flight.is_none() {
                return;
            }
            entry.in_flight = None;

            match outcome {
                Ok(value) => {
                    let now = Utc::now();
                    entry.data = Some(Arc::clone(value));
                    entry.error = None;
                    entry.stale = false;
                    entry.last_updated = Some(now);
                    CacheEvent::Loaded {
                        key: key.clone(),
                        at: now,
                    }
                }
                Err(e) => {
                    entry.error = Some(e.clone());
                    CacheEvent::Failed {
                        key: key.clone(),
                        error: e.clone(),
                    }
                }
            }
        };

        let _ = self.events.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn downcast<T: Send + Sync + 'static>(
    key: &QueryKey,
    value: CachedValue,
) -> Result<Arc<T>, CacheError> {
    value
        .downcast::<T>()
        .map_err(|_| CacheError::TypeMismatch(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_fetcher(
        calls: &Arc<AtomicUsize>,
        value: Vec<i32>,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<Vec<i32>, String>> {
        let calls = Arc::clone(calls);
        move || {
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok(value)
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn fresh_data_is_served_from_cache() {
        let cache = QueryCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::entity("projects");

        let first = cache
            .fetch(key.clone(), counting_fetcher(&calls, vec![1, 2]))
            .await
            .unwrap();
        let second = cache
            .fetch(key, counting_fetcher(&calls, vec![9]))
            .await
            .unwrap();

        assert_eq!(*first, vec![1, 2]);
        assert_eq!(*second, vec![1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_reads_share_one_request() {
        let cache = QueryCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::entity("skills");

        let (a, b) = tokio::join!(
            cache.fetch(key.clone(), counting_fetcher(&calls, vec![1])),
            cache.fetch(key.clone(), counting_fetcher(&calls, vec![2])),
        );

        assert_eq!(*a.unwrap(), vec![1]);
        assert_eq!(*b.unwrap(), vec![1]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cache = QueryCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::entity("experiences");

        cache
            .fetch(key.clone(), counting_fetcher(&calls, vec![1]))
            .await
            .unwrap();
        cache.invalidate(&key);
        let refreshed = cache
            .fetch(key, counting_fetcher(&calls, vec![1, 2]))
            .await
            .unwrap();

        assert_eq!(*refreshed, vec![1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn entity_key_invalidates_filtered_keys() {
        let cache = QueryCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let study = QueryKey::filtered("resources", "study_material");
        let other = QueryKey::entity("projects");

        cache
            .fetch(study.clone(), counting_fetcher(&calls, vec![1]))
            .await
            .unwrap();
        cache
            .fetch(other.clone(), counting_fetcher(&calls, vec![1]))
            .await
            .unwrap();

        cache.invalidate(&QueryKey::entity("resources"));

        cache
            .fetch(study, counting_fetcher(&calls, vec![1]))
            .await
            .unwrap();
        cache
            .fetch(other, counting_fetcher(&calls, vec![1]))
            .await
            .unwrap();

        // resources refetched, projects still fresh
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn failure_is_returned_and_not_cached() {
        let cache = QueryCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::entity("social_links");
        let mut events = cache.subscribe();

        let err = cache
            .fetch::<Vec<i32>, _, _>(key.clone(), || async {
                Err("connection refused".to_string())
            })
            .await
            .unwrap_err();
        assert_eq!(err, CacheError::Fetch("connection refused".to_string()));

        assert_eq!(
            events.recv().await.unwrap(),
            CacheEvent::Failed {
                key: key.clone(),
                error: "connection refused".to_string()
            }
        );

        let value = cache
            .fetch(key, counting_fetcher(&calls, vec![3]))
            .await
            .unwrap();
        assert_eq!(*value, vec![3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn result_of_invalidated_request_is_not_cached() {
        let cache = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::entity("projects");
        let (release, gate) = tokio::sync::oneshot::channel::<()>();

        let pending = {
            let cache = Arc::clone(&cache);
            let key = key.clone();
            tokio::spawn(async move {
                cache
                    .fetch(key, move || async move {
                        let _ = gate.await;
                        Ok(vec![0])
                    })
                    .await
            })
        };

        tokio::task::yield_now().await;
        cache.invalidate(&key);
        let _ = release.send(());

        let old = pending.await.unwrap().unwrap();
        assert_eq!(*old, vec![0]);

        let fresh = cache
            .fetch(key, counting_fetcher(&calls, vec![1]))
            .await
            .unwrap();
        assert_eq!(*fresh, vec![1]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn snapshot_follows_loading_loaded_and_failed() {
        let cache = Arc::new(QueryCache::new());
        let key = QueryKey::entity("projects");
        let (release, gate) = tokio::sync::oneshot::channel::<()>();

        assert!(cache.snapshot(&key).is_none());

        let pending = {
            let cache = Arc::clone(&cache);
            let key = key.clone();
            tokio::spawn(async move {
                cache
                    .fetch(key, move || async move {
                        let _ = gate.await;
                        Ok(vec![1])
                    })
                    .await
            })
        };
        tokio::task::yield_now().await;

        let loading = cache.snapshot(&key).unwrap();
        assert!(loading.loading);
        assert!(loading.data.is_none());
        assert!(loading.last_updated.is_none());

        let _ = release.send(());
        pending.await.unwrap().unwrap();

        let loaded = cache.snapshot(&key).unwrap();
        assert!(!loaded.loading);
        assert!(!loaded.stale);
        assert!(loaded.error.is_none());
        assert_eq!(loaded.data_as::<Vec<i32>>().as_deref(), Some(&vec![1]));
        let loaded_at = loaded.last_updated.unwrap();

        cache.invalidate(&key);
        assert!(cache.snapshot(&key).unwrap().stale);

        cache
            .fetch::<Vec<i32>, _, _>(key.clone(), || async { Err("timeout".to_string()) })
            .await
            .unwrap_err();

        let failed = cache.snapshot(&key).unwrap();
        assert!(!failed.loading);
        assert!(failed.stale);
        assert_eq!(failed.error.as_deref(), Some("timeout"));
        assert_eq!(failed.data_as::<Vec<i32>>().as_deref(), Some(&vec![1]));
        assert_eq!(failed.last_updated, Some(loaded_at));
        assert!(failed.data_as::<String>().is_none());
    }

    #[tokio::test]
    async fn type_mismatch_is_reported() {
        let cache = QueryCache::new();
        let key = QueryKey::entity("profile");

        cache
            .fetch(key.clone(), || async { Ok(42_u32) })
            .await
            .unwrap();
        let err = cache
            .fetch::<String, _, _>(key, || async { Ok(String::new()) })
            .await
            .unwrap_err();

        assert_eq!(err, CacheError::TypeMismatch("profile".to_string()));
    }

    #[tokio::test]
    async fn subscribers_see_loads_and_invalidations() {
        let cache = QueryCache::new();
        let mut events = cache.subscribe();
        let key = QueryKey::filtered("resources", "project");

        cache
            .fetch(key.clone(), || async { Ok(vec![1]) })
            .await
            .unwrap();
        cache.invalidate(&QueryKey::entity("resources"));

        assert!(matches!(
            events.recv().await.unwrap(),
            CacheEvent::Loaded { key: k, .. } if k == key
        ));
        assert_eq!(
            events.recv().await.unwrap(),
            CacheEvent::Invalidated { key }
        );
    }

    #[test]
    fn key_display() {
        assert_eq!(QueryKey::entity("skills").to_string(), "skills");
        assert_eq!(
            QueryKey::filtered("resources", "project").to_string(),
            "resources:project"
        );
    }
}
