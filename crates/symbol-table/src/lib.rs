//! Ordered symbol table: a sorted-array map with binary-search lookup.
//!
//! The table maintains two parallel structures:
//! - `keys`: keys in strictly ascending order (no duplicates)
//! - `vals`: `vals[i]` is the value currently bound to `keys[i]`
//!
//! Both vectors stay index-aligned after every mutation. All lookups and
//! insertions go through [`SymbolTable::rank`], a binary search returning
//! either the index of a key or the point where it would be inserted.
//!
//! Storage grows by doubling a logical capacity whenever an insertion finds
//! the table full. It never shrinks, and there is no removal.

use std::borrow::Borrow;
use std::fmt;
use std::iter::Zip;
use std::slice;

use tracing::trace;

/// Backing-store size of a table created with [`SymbolTable::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 1000;

/// Construction options for a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of entries the table holds before its first resize. Must be non-zero.
    pub initial_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

/// Ordered-pair iterator returned by [`SymbolTable::iter`].
pub type Iter<'a, K, V> = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>;

/// An associative container keeping its keys in sorted order.
///
/// Lookup is O(log n) via binary search. Insertion of a new key is O(n) in the
/// worst case because later entries shift one slot to the right; updating an
/// existing key is O(log n) and never moves anything.
#[derive(Clone)]
pub struct SymbolTable<K, V> {
    /// Keys in ascending order.
    keys: Vec<K>,
    /// Values, index-aligned with `keys`.
    vals: Vec<V>,
    /// Logical capacity. Doubles when `keys.len()` reaches it.
    capacity: usize,
}

impl<K: Ord, V> SymbolTable<K, V> {
    /// Create an empty table with [`DEFAULT_INITIAL_CAPACITY`].
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create an empty table holding `initial_capacity` entries before it grows.
    ///
    /// # Panics
    /// Panics if `initial_capacity` is zero.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_config(TableConfig { initial_capacity })
    }

    /// Create an empty table from a [`TableConfig`].
    ///
    /// # Panics
    /// Panics if `config.initial_capacity` is zero.
    pub fn with_config(config: TableConfig) -> Self {
        let capacity = config.initial_capacity;
        assert!(capacity > 0, "SymbolTable initial capacity must be non-zero");

        SymbolTable {
            keys: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    /// Alias of [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Current logical capacity of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of `key` if present, otherwise the number of keys strictly less
    /// than `key` (its insertion point).
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Ok(idx) | Err(idx) => idx,
        }
    }

    /// Bind `val` to `key`.
    ///
    /// An existing key has its value overwritten in place. A new key is
    /// inserted at its rank, shifting every later entry one slot right.
    pub fn put(&mut self, key: K, val: V) {
        match self.search(&key) {
            Ok(idx) => {
                self.vals[idx] = val;
            }
            Err(idx) => {
                if self.keys.len() == self.capacity {
                    self.resize(2 * self.capacity);
                }
                self.keys.insert(idx, key);
                self.vals.insert(idx, val);
            }
        }
    }

    /// Look up the value bound to `key`. Returns `None` if absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        self.search(key).ok().map(|idx| &self.vals[idx])
    }

    /// Keys in ascending order.
    ///
    /// The iterator borrows the table, so it always reflects the state at the
    /// time of the call. Call again to restart.
    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Values in ascending order of their keys.
    pub fn values(&self) -> slice::Iter<'_, V> {
        self.vals.iter()
    }

    /// `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.keys.iter().zip(self.vals.iter())
    }

    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.binary_search_by(|probe| probe.borrow().cmp(key))
    }

    /// Move every entry into fresh storage of `capacity` slots.
    /// The old vectors are dropped.
    fn resize(&mut self, capacity: usize) {
        trace!(from = self.capacity, to = capacity, "growing symbol table");

        let mut keys = Vec::with_capacity(capacity);
        let mut vals = Vec::with_capacity(capacity);
        keys.append(&mut self.keys);
        vals.append(&mut self.vals);

        self.keys = keys;
        self.vals = vals;
        self.capacity = capacity;
    }
}

impl<K: Ord, V> Default for SymbolTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SymbolTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().zip(self.vals.iter()))
            .finish()
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a SymbolTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SymbolTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (key, val) in iter {
            table.put(key, val);
        }
        table
    }
}
