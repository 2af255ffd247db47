use std::collections::HashMap;
use std::hash::Hash;
use tokio::sync::RwLock;

/// Default number of memoized responses per cache
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Bounded memoization cache for upstream responses
///
/// Keys are exact call arguments, so a hit can never serve data for a
/// semantically different query. There is no invalidation; a stale entry is
/// acceptable, a torn one is not, hence the `RwLock` around the map. When
/// the cache is full the whole map is flushed before the next insert, which
/// keeps memory bounded without tracking entry age.
#[derive(Debug)]
pub struct ResponseCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
    capacity: usize,
}

impl<K, V> ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Look up a memoized response
    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    /// Memoize a response, flushing the cache first if it is full
    pub async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            entries.clear();
        }
        entries.insert(key, value);
    }

    /// Number of memoized entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<K, V> Default for ResponseCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
