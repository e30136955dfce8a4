//! Bounded memo cache.
//!
//! Large earthquake catalogues repeat the same handful of location strings
//! thousands of times, so the classifier memoizes both normalization and
//! classification. The cache is:
//!
//! - keyed by `String`, valued by any `Clone` type;
//! - optionally bounded, evicting the oldest inserted key first (FIFO);
//! - safe to share between threads (`Mutex` around the map).
//!
//! The value is computed *outside* the lock, so two threads racing on the same
//! key may both compute it. Classification is pure, so both results are equal
//! and the second insert is a no-op.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// Counters reported by [`MemoCache::stats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
    /// `None` means unbounded.
    pub capacity: Option<usize>,
}

#[derive(Debug)]
struct MemoState<V> {
    map: HashMap<String, V>,
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

#[derive(Debug)]
pub struct MemoCache<V> {
    name: &'static str,
    capacity: Option<usize>,
    state: Mutex<MemoState<V>>,
}

impl<V: Clone> MemoCache<V> {
    /// `capacity`: `None` for unbounded, `Some(0)` to disable caching.
    pub fn new(name: &'static str, capacity: Option<usize>) -> Self {
        MemoCache {
            name,
            capacity,
            state: Mutex::new(MemoState {
                map: HashMap::new(),
                order: VecDeque::new(),
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    /// The second element is `true` on a hit.
    pub fn get_or_insert_with(&self, key: &str, compute: impl FnOnce() -> V) -> (V, bool) {
        if self.capacity == Some(0) {
            self.lock().misses += 1;
            return (compute(), false);
        }

        {
            let mut state = self.lock();
            let cached = state.map.get(key).cloned();
            match cached {
                Some(value) => {
                    state.hits += 1;
                    return (value, true);
                }
                None => state.misses += 1,
            }
        }

        let value = compute();
        self.insert(key, value.clone());
        (value, false)
    }

    fn insert(&self, key: &str, value: V) {
        let mut state = self.lock();
        if state.map.contains_key(key) {
            return;
        }

        if let Some(capacity) = self.capacity {
            while state.map.len() >= capacity {
                let Some(oldest) = state.order.pop_front() else {
                    break;
                };
                state.map.remove(&oldest);
                state.evictions += 1;
                tracing::debug!(target: "epiloc::memo", cache = self.name, key = %oldest, "evicted");
            }
        }

        state.order.push_back(key.to_string());
        state.map.insert(key.to_string(), value);
    }

    pub fn stats(&self) -> MemoStats {
        let state = self.lock();
        MemoStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            len: state.map.len(),
            capacity: self.capacity,
        }
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.map.clear();
        state.order.clear();
    }

    // A panic while holding the lock cannot leave a half-written entry, so a
    // poisoned mutex is still usable.
    fn lock(&self) -> MutexGuard<'_, MemoState<V>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_lookup_is_a_hit() {
        let cache = MemoCache::new("test", None);
        let calls = Cell::new(0);

        let (v, hit) = cache.get_or_insert_with("a", || {
            calls.set(calls.get() + 1);
            1
        });
        assert_eq!((v, hit), (1, false));

        let (v, hit) = cache.get_or_insert_with("a", || {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!((v, hit), (1, true));
        assert_eq!(calls.get(), 1);

        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.len), (1, 1, 1));
    }

    #[test]
    fn bounded_cache_evicts_oldest_first() {
        let cache = MemoCache::new("test", Some(2));
        cache.get_or_insert_with("a", || 1);
        cache.get_or_insert_with("b", || 2);
        cache.get_or_insert_with("c", || 3);

        let stats = cache.stats();
        assert_eq!(stats.len, 2);
        assert_eq!(stats.evictions, 1);

        // "a" was evicted, "c" is still there.
        assert!(!cache.get_or_insert_with("a", || 10).1);
        assert!(cache.get_or_insert_with("c", || 30).1);
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let cache = MemoCache::new("test", Some(0));
        cache.get_or_insert_with("a", || 1);
        let (v, hit) = cache.get_or_insert_with("a", || 2);

        assert_eq!((v, hit), (2, false));
        assert_eq!(cache.stats().len, 0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn clear_keeps_counters() {
        let cache = MemoCache::new("test", None);
        cache.get_or_insert_with("a", || 1);
        cache.get_or_insert_with("a", || 1);
        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.len, 0);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn cache_is_shareable_across_threads() {
        let cache = std::sync::Arc::new(MemoCache::new("test", Some(64)));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for i in 0..32 {
                        let key = format!("k{}", (i + t) % 16);
                        let (v, _) = cache.get_or_insert_with(&key, || key.len());
                        assert_eq!(v, key.len());
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert!(cache.stats().len <= 16);
    }
}
