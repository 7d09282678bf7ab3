//! Property attributes, descriptors, and the [`create_prop`] helper.
//!
//! Properties follow data-descriptor semantics: each has a value plus
//! `writable`, `enumerable` and `configurable` flags. Enumerability decides
//! whether a key takes part in iteration, serialisation and merging;
//! writability guards ordinary assignment; configurability guards
//! redefinition.

mod descriptor;

use crate::error::{UtilsError, UtilsResult};
use crate::node::{Mapping, Node};

pub use descriptor::PropertyDescriptor;

/// Attribute flags attached to every property.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PropertyAttributes {
    /// Whether ordinary assignment may replace the value.
    pub writable: bool,
    /// Whether the key is visible to iteration and merging.
    pub enumerable: bool,
    /// Whether the property may be redefined.
    pub configurable: bool,
}

impl PropertyAttributes {
    /// Attributes of properties created by assignment or literals.
    pub const OPEN: Self = Self {
        writable: true,
        enumerable: true,
        configurable: true,
    };

    /// Attributes a definition falls back to when a flag is left unspecified.
    pub const LOCKED: Self = Self {
        writable: false,
        enumerable: false,
        configurable: false,
    };
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self::OPEN
    }
}

/// A value stored in a [`Mapping`] together with its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    value: Node,
    attributes: PropertyAttributes,
}

impl Property {
    /// Create a property holding `value` with `attributes`.
    #[must_use]
    pub const fn new(value: Node, attributes: PropertyAttributes) -> Self {
        Self { value, attributes }
    }

    /// Create a writable, enumerable, configurable property.
    #[must_use]
    pub const fn open(value: Node) -> Self {
        Self::new(value, PropertyAttributes::OPEN)
    }

    /// Borrow the stored value.
    #[must_use]
    pub const fn value(&self) -> &Node {
        &self.value
    }

    /// Returns the attribute flags.
    #[must_use]
    pub const fn attributes(&self) -> PropertyAttributes {
        self.attributes
    }

    /// Consume the property, returning its value.
    #[must_use]
    pub fn into_value(self) -> Node {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: Node) {
        self.value = value;
    }

    pub(crate) fn from_descriptor(descriptor: PropertyDescriptor) -> Self {
        let (value, writable, enumerable, configurable) = descriptor.into_parts();
        let fallback = PropertyAttributes::LOCKED;
        Self {
            value: value.unwrap_or_default(),
            attributes: PropertyAttributes {
                writable: writable.unwrap_or(fallback.writable),
                enumerable: enumerable.unwrap_or(fallback.enumerable),
                configurable: configurable.unwrap_or(fallback.configurable),
            },
        }
    }

    /// Apply `descriptor` to an existing property named `key`.
    pub(crate) fn redefine(&mut self, key: &str, descriptor: PropertyDescriptor) -> UtilsResult<()> {
        if !self.permits(&descriptor) {
            return Err(UtilsError::non_configurable(key));
        }
        let (value, writable, enumerable, configurable) = descriptor.into_parts();
        if let Some(next) = value {
            self.value = next;
        }
        if let Some(flag) = writable {
            self.attributes.writable = flag;
        }
        if let Some(flag) = enumerable {
            self.attributes.enumerable = flag;
        }
        if let Some(flag) = configurable {
            self.attributes.configurable = flag;
        }
        Ok(())
    }

    fn permits(&self, descriptor: &PropertyDescriptor) -> bool {
        let current = self.attributes;
        if current.configurable {
            return true;
        }
        if descriptor.configurable() == Some(true)
            || descriptor
                .enumerable()
                .is_some_and(|flag| flag != current.enumerable)
        {
            return false;
        }
        if current.writable {
            return true;
        }
        // Read-only and locked: only no-op value writes and `writable: false` pass.
        descriptor.writable() != Some(true)
            && descriptor
                .value()
                .is_none_or(|value| value.same_value(&self.value))
    }
}

/// Define `key` on `object` from `descriptor` and return `object`.
///
/// A missing key is created with the descriptor's value (`null` when absent)
/// and every unspecified flag set to `false`. An existing configurable key
/// takes whichever fields the descriptor specifies. An existing
/// non-configurable key only accepts changes that keep it non-configurable
/// with the same enumerability; when it is also read-only, it further
/// rejects becoming writable and any value that is not the same value.
///
/// # Errors
///
/// Returns [`UtilsError::NonConfigurable`] when the redefinition is refused.
/// `object` is left untouched in that case.
///
/// # Examples
///
/// ```
/// use vime_utils::{Mapping, Node, PropertyDescriptor, create_prop};
///
/// let mut player = Mapping::new();
/// create_prop(
///     &mut player,
///     "version",
///     PropertyDescriptor::new().with_value("5.0.0").with_enumerable(true),
/// )?
/// .insert("paused", true);
///
/// assert_eq!(player.get("version"), Some(&Node::from("5.0.0")));
/// assert!(player.assign("version", Node::from("6.0.0")).is_err());
/// # Ok::<_, vime_utils::UtilsError>(())
/// ```
pub fn create_prop(
    object: &mut Mapping,
    key: impl Into<String>,
    descriptor: PropertyDescriptor,
) -> UtilsResult<&mut Mapping> {
    object.define_property(key, descriptor)?;
    Ok(object)
}
