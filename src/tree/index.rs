//! Prefix index for one tree level.
//!
//! Maps keys (command names, subtree names and shortcuts) to values and
//! resolves queries by exact match or shortest unambiguous prefix. Keys are
//! kept in a `BTreeMap`, so every key sharing a prefix sits in one contiguous
//! range starting at the prefix itself.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use alloc::string::{String, ToString};
use core::ops::Bound;

use crate::error::DispatchError;

/// Ordered key index with prefix lookup.
#[derive(Debug, Clone)]
pub struct PrefixIndex<V> {
    entries: BTreeMap<String, V>,
}

impl<V> PrefixIndex<V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no key is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `key -> value`.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Key inserted
    /// - `Err(DispatchError::DuplicateKey)` - Key already present; the
    ///   existing value is left untouched
    pub fn add(&mut self, key: &str, value: V) -> Result<(), DispatchError> {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => Err(DispatchError::DuplicateKey(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Resolve `query` to a value.
    ///
    /// An exact key match wins even when `query` also prefixes longer keys.
    /// Otherwise the query must be a proper prefix of exactly one key.
    ///
    /// # Returns
    ///
    /// - `Ok(&V)` - Exact match or unique prefix match
    /// - `Err(DispatchError::Ambiguous)` - Query prefixes two or more keys
    /// - `Err(DispatchError::NotFound)` - Query is empty or prefixes no key
    pub fn find(&self, query: &str) -> Result<&V, DispatchError> {
        if query.is_empty() {
            return Err(DispatchError::NotFound);
        }
        if let Some(value) = self.entries.get(query) {
            return Ok(value);
        }

        let mut matches = self.prefixed(query);
        match (matches.next(), matches.next()) {
            (Some((_, value)), None) => Ok(value),
            (Some(_), Some(_)) => Err(DispatchError::Ambiguous),
            (None, _) => Err(DispatchError::NotFound),
        }
    }

    /// Every `(key, value)` whose key starts with `prefix`, equality included,
    /// in lexicographic key order. An empty prefix yields every entry.
    pub fn find_candidates<'a>(&'a self, prefix: &str) -> impl Iterator<Item = (&'a str, &'a V)> {
        self.prefixed(prefix)
    }

    /// Iterate all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn prefixed<'a>(&'a self, prefix: &str) -> impl Iterator<Item = (&'a str, &'a V)> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for PrefixIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
