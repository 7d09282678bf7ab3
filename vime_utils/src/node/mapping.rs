//! Ordered mapping with per-property attributes.

use indexmap::IndexMap;

use crate::error::{UtilsError, UtilsResult};
use crate::property::{Property, PropertyDescriptor};

use super::Node;

/// Insertion-ordered association of keys to [`Property`] values.
///
/// Every entry carries [`crate::PropertyAttributes`]. Entries created through
/// [`Mapping::insert`] or [`Mapping::assign`] are writable, enumerable and
/// configurable; [`Mapping::define_property`] gives full control.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<String, Property>,
}

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` properties.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of own properties, enumerable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping has no own properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` is an own property.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value of the own property `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key).map(Property::value)
    }

    /// The own property `key`, including its attributes.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    /// Store `value` under `key` as an open data property, replacing any
    /// existing property and its attributes. Returns the previous value.
    ///
    /// This is the builder-style entry point used when constructing literals;
    /// it ignores writability. Use [`Mapping::assign`] to respect it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        self.entries
            .insert(key.into(), Property::open(value.into()))
            .map(Property::into_value)
    }

    /// Ordinary assignment of `value` to `key`.
    ///
    /// An existing property keeps its attributes and position; a missing one
    /// is appended as an open data property.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::ReadOnly`] when `key` exists and is not writable.
    pub fn assign(&mut self, key: &str, value: Node) -> UtilsResult<()> {
        match self.entries.get_mut(key) {
            Some(property) if property.attributes().writable => {
                property.set_value(value);
                Ok(())
            }
            Some(_) => Err(UtilsError::read_only(key)),
            None => {
                self.entries.insert(key.to_owned(), Property::open(value));
                Ok(())
            }
        }
    }

    /// Define or redefine `key` from `descriptor`.
    ///
    /// See [`crate::create_prop`] for the rules applied.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::NonConfigurable`] when `key` exists, is not
    /// configurable, and `descriptor` asks for a forbidden change.
    pub fn define_property(
        &mut self,
        key: impl Into<String>,
        descriptor: PropertyDescriptor,
    ) -> UtilsResult<()> {
        let name = key.into();
        match self.entries.get_mut(&name) {
            Some(property) => property.redefine(&name, descriptor),
            None => {
                self.entries
                    .insert(name, Property::from_descriptor(descriptor));
                Ok(())
            }
        }
    }

    /// All own keys in insertion order, enumerable or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Own enumerable keys in insertion order.
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Own enumerable entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries
            .iter()
            .filter(|(_, property)| property.attributes().enumerable)
            .map(|(key, property)| (key.as_str(), property.value()))
    }

    /// Copy the own enumerable entries into a new mapping.
    ///
    /// Nested containers are shared, not copied, and every copied property
    /// becomes an open data property. Non-enumerable properties are dropped.
    #[must_use]
    pub fn shallow_copy(&self) -> Self {
        self.iter().map(|(key, value)| (key, value.clone())).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Node>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter();
        let mut mapping = Self::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            mapping.insert(key, value);
        }
        mapping
    }
}
