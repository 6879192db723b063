//! Storage backends for the memo cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for memoized values.
///
/// # Contract
///
/// - `get` returns `None` for an index that was never stored
/// - `get_or_insert` calls `f` only when the index is not stored yet; an
///   existing value is never overwritten
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value for `index`, storing `f()` first if missing.
    fn get_or_insert<F>(&mut self, index: I, f: F) -> &K
    where
        F: FnOnce() -> K;

    /// Number of cached values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense, sequential indices starting from 0. The Vec grows to
/// fit the largest index seen.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn get_or_insert<F>(&mut self, index: usize, f: F) -> &K
    where
        F: FnOnce() -> K,
    {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        let slot = &mut self.data[index];
        if slot.is_none() {
            self.filled += 1;
        }
        slot.get_or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse indices or non-integer index types.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert<F>(&mut self, index: I, f: F) -> &K
    where
        F: FnOnce() -> K,
    {
        self.data.entry(index).or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// A backend that never caches.
///
/// Every lookup misses, so a memoized function backed by it recomputes on
/// every call. Only the most recent value is held, to hand out a reference.
#[derive(Debug)]
pub struct NoCacheBackend<K> {
    last: Option<K>,
}

impl<K> NoCacheBackend<K> {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl<K> Default for NoCacheBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, K> Backend<I, K> for NoCacheBackend<K> {
    fn get(&self, _index: &I) -> Option<&K> {
        None
    }

    fn get_or_insert<F>(&mut self, _index: I, f: F) -> &K
    where
        F: FnOnce() -> K,
    {
        self.last.insert(f())
    }

    fn len(&self) -> usize {
        0
    }
}
