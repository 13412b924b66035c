use std::collections::HashMap;
use std::hash::Hash;

/// Subproblem cache for a single scoring call.
///
/// The scorer creates one per candidate and drops it when the call returns, so
/// entries never leak between candidates.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq,
    V: Copy,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the stored value for `key`, running `compute` only on the first request.
    ///
    /// `compute` receives the cache so that it can resolve nested subproblems.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce(&mut Self) -> V,
    {
        if let Some(&value) = self.entries.get(&key) {
            return value;
        }
        let value = compute(self);
        self.entries.insert(key, value);
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
