//! In-memory field registry.

use super::{builtin, FieldSpec};
use std::collections::BTreeMap;

/// Field definitions keyed by name.
///
/// Names are unique; registering a field under an existing name replaces the
/// previous definition.
///
/// # Example
///
/// ```
/// use format_mask::field::{FieldRegistry, FieldSpec, PlainRule};
///
/// let registry = FieldRegistry::new().with(FieldSpec::new("rate").plain(PlainRule::Percent));
///
/// assert!(registry.get("rate").is_some());
/// assert!(registry.get("cpf").is_none());
/// assert!(FieldRegistry::brazilian().get("cpf").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    fields: BTreeMap<String, FieldSpec>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in Brazilian fields.
    ///
    /// See [`builtin`] for the list.
    pub fn brazilian() -> Self {
        builtin::fields().into_iter().collect()
    }

    /// Registers a field, returning the definition it replaced.
    pub fn register(&mut self, spec: FieldSpec) -> Option<FieldSpec> {
        tracing::trace!(field = %spec.name, "registering field");
        self.fields.insert(spec.name.clone(), spec)
    }

    /// Builder method to register a field.
    pub fn with(mut self, spec: FieldSpec) -> Self {
        self.register(spec);
        self
    }

    /// Looks up a field by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Removes a field by name.
    pub fn remove(&mut self, name: &str) -> Option<FieldSpec> {
        self.fields.remove(name)
    }

    /// Returns true if a field is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over field definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    /// Returns the number of registered fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldSpec> for FieldRegistry {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<FieldSpec> for FieldRegistry {
    fn extend<I: IntoIterator<Item = FieldSpec>>(&mut self, iter: I) {
        for spec in iter {
            self.register(spec);
        }
    }
}
