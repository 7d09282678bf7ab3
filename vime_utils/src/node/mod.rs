//! Tree data model shared by the merge and property helpers.
//!
//! A [`Node`] is either a [`Mapping`], an ordered sequence, or a [`Scalar`].
//! Containers sit behind [`Arc`], so cloning a node is cheap and shares the
//! underlying storage. Mutation goes through [`Node::as_mapping_mut`], which
//! copies a shared mapping before handing out a mutable borrow; other holders
//! of the same container never observe the change.

mod convert;
mod mapping;

use std::sync::Arc;

use serde_json::Number;

use crate::unit::{NodeKind, classify};

pub use mapping::Mapping;

/// A value in a plain data tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Key to property association.
    Mapping(Arc<Mapping>),
    /// Ordered list of nodes.
    Sequence(Arc<Vec<Node>>),
    /// Atomic value.
    Scalar(Scalar),
}

/// Values the merge treats atomically.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Absent or `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// JSON number.
    Number(Number),
    /// UTF-8 text.
    Text(String),
    /// Opaque binary buffer. Never merged, only replaced.
    Bytes(Arc<[u8]>),
}

impl Scalar {
    /// Wrap `data` as an opaque byte buffer.
    #[must_use]
    pub fn bytes(data: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(data.into())
    }

    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bytes(lhs), Self::Bytes(rhs)) => Arc::ptr_eq(lhs, rhs),
            (Self::Number(lhs), Self::Number(rhs)) => same_number(lhs, rhs),
            _ => self == other,
        }
    }
}

/// Numbers compare as `f64`; zeros must also agree on sign.
fn same_number(lhs: &Number, rhs: &Number) -> bool {
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(left), Some(right)) => {
            left == right && left.is_sign_negative() == right.is_sign_negative()
        }
        _ => lhs == rhs,
    }
}

impl Node {
    /// The `null` scalar.
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Wrap `mapping` in a fresh container.
    #[must_use]
    pub fn mapping(mapping: Mapping) -> Self {
        Self::Mapping(Arc::new(mapping))
    }

    /// Build a sequence from `items`.
    #[must_use]
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(Arc::new(items.into_iter().collect()))
    }

    /// Returns the shape of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        classify(self)
    }

    /// Returns `true` for the `null` scalar.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Borrow the mapping, if this node is one.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping.as_ref()),
            Self::Sequence(_) | Self::Scalar(_) => None,
        }
    }

    /// Mutably borrow the mapping, copying it first when the container is
    /// shared with another node.
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(mapping) => Some(Arc::make_mut(mapping)),
            Self::Sequence(_) | Self::Scalar(_) => None,
        }
    }

    /// Borrow the items, if this node is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            Self::Mapping(_) | Self::Scalar(_) => None,
        }
    }

    /// Borrow the scalar, if this node is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Mapping(_) | Self::Sequence(_) => None,
        }
    }

    /// Look up an own property of a mapping node by `key`.
    ///
    /// Returns `None` for missing keys and for non-mapping nodes.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping()?.get(key)
    }

    /// Identity comparison.
    ///
    /// Containers and byte buffers compare by pointer, every other scalar by
    /// value. Two structurally equal mappings built separately are `==` but
    /// not the same value.
    ///
    /// ```
    /// use vime_utils::Node;
    /// use serde_json::json;
    ///
    /// let list = Node::from(json!([1, 2]));
    /// let alias = list.clone();
    /// assert!(list.same_value(&alias));
    /// assert!(!list.same_value(&Node::from(json!([1, 2]))));
    /// ```
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Mapping(lhs), Self::Mapping(rhs)) => Arc::ptr_eq(lhs, rhs),
            (Self::Sequence(lhs), Self::Sequence(rhs)) => Arc::ptr_eq(lhs, rhs),
            (Self::Scalar(lhs), Self::Scalar(rhs)) => lhs.same_value(rhs),
            _ => false,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::null()
    }
}
