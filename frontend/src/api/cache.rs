use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Cached response body with expiration
#[derive(Clone, Debug)]
pub struct CacheEntry {
    data: String,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(data: String, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            data,
            expires_at: now + ttl,
        }
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Response cache for team reads. Entries are dropped by TTL or explicitly
/// after a successful update so the next read hits the server.
pub struct RequestCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl RequestCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Cache with a 5 minute TTL
    pub fn new_default() -> Self {
        Self::new(Duration::minutes(5))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // Single-threaded in the browser; a poisoned lock still holds usable data.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the cached body for `key`, calling `fetcher` on a miss
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetcher: F) -> Result<String, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, String>>,
    {
        if let Some(data) = self.get(key) {
            debug!("Cache hit for key: {}", key);
            return Ok(data);
        }

        debug!("Cache miss for key: {}, fetching...", key);
        let result = fetcher().await?;
        self.set(key.to_string(), result.clone());
        Ok(result)
    }

    /// Returns a live (non-expired) value
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_at(key, Utc::now())
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        self.lock()
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.data.clone())
    }

    pub fn set(&self, key: String, value: String) {
        self.set_at(key, value, Utc::now());
    }

    fn set_at(&self, key: String, value: String, now: DateTime<Utc>) {
        let entry = CacheEntry::new(value, self.ttl, now);
        self.lock().insert(key, entry);
    }

    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Drops every entry whose key contains `pattern`
    pub fn invalidate_pattern(&self, pattern: &str) {
        self.lock().retain(|key, _| !key.contains(pattern));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub static REQUEST_CACHE: LazyLock<RequestCache> = LazyLock::new(RequestCache::new_default);

pub async fn cached_request<F, Fut>(key: &str, fetcher: F) -> Result<String, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    REQUEST_CACHE.get_or_fetch(key, fetcher).await
}

pub fn invalidate_cache_pattern(pattern: &str) {
    REQUEST_CACHE.invalidate_pattern(pattern);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = RequestCache::new(Duration::seconds(60));
        let now = Utc::now();
        cache.set_at("teams:t1".to_string(), "{}".to_string(), now);

        assert_eq!(cache.get_at("teams:t1", now + Duration::seconds(30)), Some("{}".to_string()));
        assert_eq!(cache.get_at("teams:t1", now + Duration::seconds(61)), None);
    }

    #[test]
    fn test_remove_and_pattern_invalidation() {
        let cache = RequestCache::new(Duration::seconds(60));
        cache.set("teams:t1".to_string(), "a".to_string());
        cache.set("teams:t10".to_string(), "b".to_string());
        cache.set("teams:t2".to_string(), "c".to_string());

        cache.remove("teams:t2");
        assert_eq!(cache.len(), 2);

        cache.invalidate_pattern("teams:t1");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_or_fetch_only_fetches_on_miss() {
        let cache = RequestCache::new(Duration::seconds(60));
        let calls = Cell::new(0);
        let counter = &calls;

        let fetch = move || async move {
            counter.set(counter.get() + 1);
            Ok::<_, String>("{\"id\":\"t1\"}".to_string())
        };

        let first = futures::executor::block_on(cache.get_or_fetch("teams:t1", fetch));
        let second = futures::executor::block_on(cache.get_or_fetch("teams:t1", fetch));

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        cache.remove("teams:t1");
        futures::executor::block_on(cache.get_or_fetch("teams:t1", fetch)).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_failed_fetch_is_not_cached() {
        let cache = RequestCache::new(Duration::seconds(60));

        let result = futures::executor::block_on(
            cache.get_or_fetch("teams:t1", || async { Err::<String, _>("HTTP 500".to_string()) }),
        );

        assert_eq!(result, Err("HTTP 500".to_string()));
        assert!(cache.get("teams:t1").is_none());
    }
}
