//! Type predicates used to classify nodes before merging.
//!
//! [`is_object`] is deliberately narrow: only the [`Node::Mapping`] variant
//! counts as a plain object. Sequences, `null`, and opaque byte buffers are
//! all rejected, so the merge treats them as values to overwrite.

use crate::node::Node;

/// Shape of a [`Node`] as seen by the merge rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// A key to value association.
    Mapping,
    /// An ordered list of nodes.
    Sequence,
    /// Anything handled atomically.
    Scalar,
}

/// Classify `node` into its [`NodeKind`].
#[must_use]
pub const fn classify(node: &Node) -> NodeKind {
    match node {
        Node::Mapping(_) => NodeKind::Mapping,
        Node::Sequence(_) => NodeKind::Sequence,
        Node::Scalar(_) => NodeKind::Scalar,
    }
}

/// Returns `true` when `node` is a plain mapping.
///
/// # Examples
///
/// ```
/// use vime_utils::{Node, is_object};
/// use serde_json::json;
///
/// assert!(is_object(&Node::from(json!({"a": 1}))));
/// assert!(!is_object(&Node::from(json!([1, 2]))));
/// assert!(!is_object(&Node::null()));
/// ```
#[must_use]
pub const fn is_object(node: &Node) -> bool {
    matches!(classify(node), NodeKind::Mapping)
}

/// Returns `true` when `node` is an ordered sequence.
#[must_use]
pub const fn is_array(node: &Node) -> bool {
    matches!(classify(node), NodeKind::Sequence)
}
