use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;
use tracing::debug;

/// How a cached lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Fresh entry found on first lookup
    Hit,
    /// Another task computed the value while this one waited for it
    Coalesced,
    /// Value computed by this call and stored
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Coalesced => "coalesced",
            Self::Miss => "miss",
        }
    }
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.stored_at) < ttl
    }
}

/// In-memory key/value cache with a fixed time-to-live.
///
/// Entries expire lazily: an expired entry is removed by the lookup that
/// observes it, or by [`TtlCache::purge_expired`]. Concurrent misses on the
/// same key are collapsed so the value is computed once.
///
/// Time is read from the tokio clock, which tests can pause and advance.
pub struct TtlCache<V> {
    name: &'static str,
    ttl: Duration,
    max_entries: Option<usize>,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    in_flight: InFlightMap,
}

type InFlightMap = std::sync::Mutex<HashMap<String, Arc<Mutex<()>>>>;

/// Membership of one task in the per-key lock table. Dropping it, including
/// when the owning future is cancelled, releases the task's handle and removes
/// the key once nobody else holds it.
struct InFlight<'a> {
    map: &'a InFlightMap,
    key: &'a str,
    key_lock: Option<Arc<Mutex<()>>>,
}

impl<'a> InFlight<'a> {
    fn enter(map: &'a InFlightMap, key: &'a str) -> Self {
        let mut in_flight = map.lock().unwrap_or_else(PoisonError::into_inner);
        let key_lock = in_flight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        Self {
            map,
            key,
            key_lock: Some(key_lock),
        }
    }

    async fn acquire(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.key_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        // Handles are only cloned or dropped under this lock, so a count of
        // one means the table holds the last reference.
        drop(self.key_lock.take());
        if in_flight
            .get(self.key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            in_flight.remove(self.key);
        }
    }
}

impl<V> std::fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .finish()
    }
}

impl<V: Clone> TtlCache<V> {
    /// `max_entries` of `None` leaves the cache unbounded.
    pub fn new(name: &'static str, ttl: Duration, max_entries: Option<usize>) -> Self {
        Self {
            name,
            ttl,
            max_entries: max_entries.filter(|m| *m > 0),
            entries: Mutex::new(HashMap::new()),
            in_flight: std::sync::Mutex::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        let fresh = entries.get(key)?.is_fresh(now, self.ttl);
        if fresh {
            return entries.get(key).map(|e| e.value.clone());
        }

        debug!("TtlCache[{}]: entry '{}' expired, evicting", self.name, key);
        entries.remove(key);
        None
    }

    pub async fn set(&self, key: &str, value: V) {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        if let Some(max) = self.max_entries
            && entries.len() >= max
            && !entries.contains_key(key)
        {
            let ttl = self.ttl;
            entries.retain(|_, e| e.is_fresh(now, ttl));

            if entries.len() >= max {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.stored_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    debug!("TtlCache[{}]: full, evicting oldest '{}'", self.name, oldest);
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }

    /// Returns the cached value for `key`, or runs `compute` and caches its
    /// output. Only one task computes a given key at a time; the others wait
    /// and then read what it stored. Errors are returned and not cached.
    pub async fn get_or_try_insert_with<F, Fut, E>(
        &self,
        key: &str,
        compute: F,
    ) -> Result<(V, CacheStatus), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key).await {
            debug!("TtlCache[{}]: hit '{}'", self.name, key);
            return Ok((value, CacheStatus::Hit));
        }

        let flight = InFlight::enter(&self.in_flight, key);
        let _held = flight.acquire().await;

        if let Some(value) = self.get(key).await {
            debug!("TtlCache[{}]: coalesced '{}'", self.name, key);
            return Ok((value, CacheStatus::Coalesced));
        }

        debug!("TtlCache[{}]: miss '{}'", self.name, key);
        let value = compute().await?;
        self.set(key, value.clone()).await;
        Ok((value, CacheStatus::Miss))
    }

    /// Drops every expired entry. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, e| e.is_fresh(now, ttl));
        before - entries.len()
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}
