//! Storage of raw values supplied before formatting.
//!
//! Every field call records the untransformed argument under the field's
//! name so callers can get the original back after displaying the formatted
//! or masked version.
//!
//! # Security
//!
//! - Stored values are zeroed when overwritten, removed, cleared and on drop
//! - Debug output lists keys only, never values

use std::collections::HashMap;
use std::fmt;
use zeroize::Zeroize;

/// Mapping from a field name to the last raw value supplied for it.
///
/// # Example
///
/// ```
/// use format_mask::store::OriginalValueStore;
///
/// let mut store = OriginalValueStore::new();
/// store.record("cpf", "12345678909");
///
/// assert_eq!(store.get("cpf"), "12345678909");
/// assert_eq!(store.get("cnpj"), "");
/// ```
#[derive(Clone, Default)]
pub struct OriginalValueStore {
    values: HashMap<String, String>,
}

impl OriginalValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `key`, replacing (and zeroing) any previous value.
    pub fn record(&mut self, key: &str, value: &str) {
        if let Some(mut previous) = self.values.insert(key.to_string(), value.to_string()) {
            previous.zeroize();
        }
    }

    /// Returns the value recorded under `key`, or an empty string.
    #[inline]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Returns true if a value was recorded under `key`.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Removes the value recorded under `key`.
    ///
    /// Returns true if something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.values.remove(key) {
            Some(mut value) => {
                value.zeroize();
                true
            }
            None => false,
        }
    }

    /// Removes every recorded value.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.zeroize();
        }
        self.values.clear();
    }

    /// Returns the number of recorded keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over recorded keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Debug for OriginalValueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys only, raw values never reach logs
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("OriginalValueStore")
            .field("keys", &keys)
            .finish()
    }
}

impl Drop for OriginalValueStore {
    fn drop(&mut self) {
        for value in self.values.values_mut() {
            value.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut store = OriginalValueStore::new();
        store.record("cpf", "123.456.789-09");
        assert_eq!(store.get("cpf"), "123.456.789-09");
        assert!(store.contains("cpf"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let store = OriginalValueStore::new();
        assert_eq!(store.get("anything"), "");
        assert!(!store.contains("anything"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_overwrites() {
        let mut store = OriginalValueStore::new();
        store.record("phone", "1234567890");
        store.record("phone", "12934567890");
        assert_eq!(store.get("phone"), "12934567890");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_value_is_recorded() {
        let mut store = OriginalValueStore::new();
        store.record("cep", "");
        assert!(store.contains("cep"));
        assert_eq!(store.get("cep"), "");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = OriginalValueStore::new();
        store.record("a", "1");
        store.record("b", "2");

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.get("b"), "");
    }

    #[test]
    fn test_debug_hides_values() {
        let mut store = OriginalValueStore::new();
        store.record("cpf", "12345678909");
        store.record("cep", "12345678");

        let debug = format!("{:?}", store);
        assert!(debug.contains("cpf"));
        assert!(debug.contains("cep"));
        assert!(!debug.contains("12345678909"));
        assert!(!debug.contains("12345678"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut store = OriginalValueStore::new();
        store.record("oab", "123456");
        let copy = store.clone();
        store.clear();
        assert_eq!(copy.get("oab"), "123456");
    }
}
