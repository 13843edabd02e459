//! An in-memory cache for read responses.
//!
//! Every read the [ApiClient](crate::ApiClient) performs is keyed by the
//! request's path and query parameters and stored here. Entries stay fresh
//! for a configurable TTL; any successful mutation clears the whole cache so
//! that the next read after a write always observes post-write state.
//!
//! The cache is an explicit instance owned by the client, constructed once
//! per session and injectable in tests. It is process-local and holds no
//! state across restarts.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use serde_json::Value;

/// The identity of a read request: its path plus canonically ordered query
/// parameters.
///
/// Two reads of the same resource with the same parameters, regardless of
/// the order the parameters were supplied in, produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build the key for `path` with `query` parameters.
    pub fn new(path: &str, query: &[(&str, &str)]) -> Self {
        if query.is_empty() {
            return Self(path.to_owned());
        }

        let mut pairs: Vec<_> = query.to_vec();
        pairs.sort_unstable();

        // Serializing a slice of pairs cannot fail.
        let encoded = serde_urlencoded::to_string(&pairs).unwrap_or_default();

        Self(format!("{path}?{encoded}"))
    }
}

struct CacheEntry {
    payload: Value,
    stored_at: Instant,
}

/// A cache of read responses with TTL expiry and wholesale invalidation.
pub struct RequestCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CacheEntry>,
}

impl RequestCache {
    /// Create an empty cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// The stored payload for `key`, or `None` on a miss.
    ///
    /// An entry older than the TTL is treated as absent. A miss has no side
    /// effect; the expired entry is overwritten by the next [RequestCache::put]
    /// or removed by the next [RequestCache::invalidate_all].
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        self.get_at(key, Instant::now())
    }

    /// Record `payload` for `key`, overwriting any existing entry.
    pub fn put(&mut self, key: CacheKey, payload: Value) {
        self.put_at(key, payload, Instant::now());
    }

    /// Clear every entry.
    ///
    /// Called after any successful mutation, before the mutating call
    /// returns, so invalidation happens-before the next read is served.
    pub fn invalidate_all(&mut self) {
        let count = self.entries.len();
        self.entries.clear();

        if count > 0 {
            tracing::debug!("invalidated {count} cached responses");
        }
    }

    fn get_at(&self, key: &CacheKey, now: Instant) -> Option<Value> {
        let entry = self.entries.get(key)?;

        if now.duration_since(entry.stored_at) < self.ttl {
            Some(entry.payload.clone())
        } else {
            None
        }
    }

    fn put_at(&mut self, key: CacheKey, payload: Value, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                payload,
                stored_at: now,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use serde_json::json;

    use super::{CacheKey, RequestCache};

    const TTL: Duration = Duration::from_secs(30);

    fn key(path: &str) -> CacheKey {
        CacheKey::new(path, &[])
    }

    #[test]
    fn get_returns_payload_while_fresh() {
        let mut cache = RequestCache::new(TTL);
        let stored_at = Instant::now();
        cache.put_at(key("/transactions/"), json!([{"id": 1}]), stored_at);

        let got = cache.get_at(&key("/transactions/"), stored_at + TTL / 2);

        assert_eq!(got, Some(json!([{"id": 1}])));
    }

    #[test]
    fn get_misses_once_ttl_has_elapsed() {
        let mut cache = RequestCache::new(TTL);
        let stored_at = Instant::now();
        cache.put_at(key("/transactions/"), json!([]), stored_at);

        assert_eq!(cache.get_at(&key("/transactions/"), stored_at + TTL), None);
        assert_eq!(
            cache.get_at(&key("/transactions/"), stored_at + TTL * 2),
            None
        );
    }

    #[test]
    fn get_misses_for_unknown_key() {
        let cache = RequestCache::new(TTL);

        assert_eq!(cache.get(&key("/categories/")), None);
    }

    #[test]
    fn put_overwrites_existing_entry() {
        let mut cache = RequestCache::new(TTL);
        let first_put = Instant::now();
        cache.put_at(key("/user/"), json!({"username": "alice"}), first_put);

        // A refresh close to the end of the first entry's lifetime must
        // restart the TTL, not inherit the old timestamp.
        let second_put = first_put + TTL - Duration::from_secs(1);
        cache.put_at(key("/user/"), json!({"username": "bob"}), second_put);

        let got = cache.get_at(&key("/user/"), second_put + TTL / 2);

        assert_eq!(got, Some(json!({"username": "bob"})));
    }

    #[test]
    fn invalidate_all_clears_every_key() {
        let mut cache = RequestCache::new(TTL);
        let now = Instant::now();
        cache.put_at(key("/transactions/"), json!([]), now);
        cache.put_at(key("/categories/"), json!([]), now);
        cache.put_at(key("/savings-goals/"), json!([]), now);

        cache.invalidate_all();

        assert_eq!(cache.get_at(&key("/transactions/"), now), None);
        assert_eq!(cache.get_at(&key("/categories/"), now), None);
        assert_eq!(cache.get_at(&key("/savings-goals/"), now), None);
    }

    #[test]
    fn keys_with_different_query_parameters_are_independent() {
        let mut cache = RequestCache::new(TTL);
        let now = Instant::now();
        let page_one = CacheKey::new("/transactions/", &[("page", "1")]);
        let page_two = CacheKey::new("/transactions/", &[("page", "2")]);

        cache.put_at(page_one.clone(), json!(["first"]), now);

        assert_eq!(cache.get_at(&page_one, now), Some(json!(["first"])));
        assert_eq!(cache.get_at(&page_two, now), None);
    }

    #[test]
    fn query_parameter_order_does_not_change_the_key() {
        let forwards = CacheKey::new("/transactions/", &[("month", "3"), ("year", "2026")]);
        let backwards = CacheKey::new("/transactions/", &[("year", "2026"), ("month", "3")]);

        assert_eq!(forwards, backwards);
    }

    #[test]
    fn query_parameters_are_percent_encoded() {
        let with_space = CacheKey::new("/transactions/", &[("search", "coffee shop")]);
        let plain = CacheKey::new("/transactions/", &[("search", "coffee")]);

        assert_ne!(with_space, plain);
    }
}
