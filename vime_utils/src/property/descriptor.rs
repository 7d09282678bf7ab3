//! Property descriptors accepted by [`crate::create_prop`].

use serde::Deserialize;

use crate::node::Node;

/// Partial description of a data property.
///
/// Each field is optional: absent fields fall back to `false` (or `null` for
/// the value) when creating a property, and are left unchanged when
/// redefining one. Descriptors deserialise from JSON objects with the keys
/// `value`, `writable`, `enumerable` and `configurable`; other keys are
/// rejected.
///
/// ```
/// use vime_utils::{Node, PropertyDescriptor};
/// use serde_json::json;
///
/// let descriptor: PropertyDescriptor =
///     serde_json::from_value(json!({"value": 3, "writable": true}))?;
/// assert_eq!(descriptor.value(), Some(&Node::from(3_i64)));
/// assert_eq!(descriptor.enumerable(), None);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertyDescriptor {
    value: Option<Node>,
    writable: Option<bool>,
    enumerable: Option<bool>,
    configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            writable: None,
            enumerable: None,
            configurable: None,
        }
    }

    /// Descriptor for a writable, enumerable, configurable property holding
    /// `value`.
    #[must_use]
    pub fn open(value: impl Into<Node>) -> Self {
        Self::new()
            .with_value(value)
            .with_writable(true)
            .with_enumerable(true)
            .with_configurable(true)
    }

    /// Set the value.
    #[must_use]
    pub fn with_value(self, value: impl Into<Node>) -> Self {
        Self {
            value: Some(value.into()),
            ..self
        }
    }

    /// Set the `writable` flag.
    #[must_use]
    pub fn with_writable(self, writable: bool) -> Self {
        Self {
            writable: Some(writable),
            ..self
        }
    }

    /// Set the `enumerable` flag.
    #[must_use]
    pub fn with_enumerable(self, enumerable: bool) -> Self {
        Self {
            enumerable: Some(enumerable),
            ..self
        }
    }

    /// Set the `configurable` flag.
    #[must_use]
    pub fn with_configurable(self, configurable: bool) -> Self {
        Self {
            configurable: Some(configurable),
            ..self
        }
    }

    /// The value, if specified.
    #[must_use]
    pub const fn value(&self) -> Option<&Node> {
        self.value.as_ref()
    }

    /// The `writable` flag, if specified.
    #[must_use]
    pub const fn writable(&self) -> Option<bool> {
        self.writable
    }

    /// The `enumerable` flag, if specified.
    #[must_use]
    pub const fn enumerable(&self) -> Option<bool> {
        self.enumerable
    }

    /// The `configurable` flag, if specified.
    #[must_use]
    pub const fn configurable(&self) -> Option<bool> {
        self.configurable
    }

    pub(crate) fn into_parts(self) -> (Option<Node>, Option<bool>, Option<bool>, Option<bool>) {
        (self.value, self.writable, self.enumerable, self.configurable)
    }
}
