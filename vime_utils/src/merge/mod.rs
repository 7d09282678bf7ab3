//! Deep merging of node trees.
//!
//! The merge walks the enumerable keys of the source mapping and picks one of
//! three rules per key:
//!
//! - both sides are sequences: concatenate them (see [`SequenceStrategy`]);
//! - both sides are mappings: shallow-copy the target's mapping and merge the
//!   source's mapping into the copy;
//! - anything else: the source value overwrites the target value.
//!
//! When either top-level argument is not a mapping, the source is returned as
//! is. Merging never fails. Target properties that are not writable are left
//! alone and reported at debug level.

mod options;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::node::{Mapping, Node};

pub use options::{MergeOptions, SequenceStrategy};

/// Deep-merge `source` into `target` and return the result.
///
/// `target` is consumed and handed back with the source applied; when its
/// mapping is not shared with any other node, it is updated in place.
/// `source` is only borrowed and never changes. If either argument is not a
/// mapping, the result is `source` itself (sharing its container).
///
/// # Examples
///
/// ```rust
/// use vime_utils::{Node, merge_obj_deep};
/// use serde_json::json;
///
/// let target = Node::from(json!({"a": 1, "b": {"c": 2}, "d": [1, 2]}));
/// let source = Node::from(json!({"b": {"e": 3}, "d": [3], "f": 4}));
///
/// let merged = merge_obj_deep(target, &source);
/// assert_eq!(
///     merged,
///     Node::from(json!({"a": 1, "b": {"c": 2, "e": 3}, "d": [1, 2, 3], "f": 4}))
/// );
///
/// // Non-mapping sources win outright.
/// let list = Node::from(json!([1]));
/// assert!(merge_obj_deep(merged, &list).same_value(&list));
/// ```
#[must_use]
pub fn merge_obj_deep(target: Node, source: &Node) -> Node {
    merge_with(target, source, MergeOptions::default())
}

/// Deep-merge `source` into `target` using `options`.
///
/// Behaves like [`merge_obj_deep`] apart from the configurable rules.
#[must_use]
pub fn merge_with(target: Node, source: &Node, options: MergeOptions) -> Node {
    match (target, source) {
        (Node::Mapping(mut mapping), Node::Mapping(incoming)) => {
            Arc::make_mut(&mut mapping).merge_from(incoming, options);
            Node::Mapping(mapping)
        }
        _ => source.clone(),
    }
}

/// Fold `sources` into `target` from left to right.
///
/// Later sources take precedence over earlier ones, exactly as repeated calls
/// to [`merge_with`] would.
///
/// ```rust
/// use vime_utils::{MergeOptions, Node, merge_layers};
/// use serde_json::json;
///
/// let defaults = Node::from(json!({"volume": 50, "muted": false}));
/// let layers = [
///     Node::from(json!({"volume": 80})),
///     Node::from(json!({"muted": true})),
/// ];
/// let merged = merge_layers(defaults, &layers, MergeOptions::default());
/// assert_eq!(merged, Node::from(json!({"volume": 80, "muted": true})));
/// ```
#[must_use]
pub fn merge_layers<'a, I>(target: Node, sources: I, options: MergeOptions) -> Node
where
    I: IntoIterator<Item = &'a Node>,
{
    sources
        .into_iter()
        .enumerate()
        .fold(target, |merged, (index, source)| {
            trace!(index, kind = ?source.kind(), "merging layer");
            merge_with(merged, source, options)
        })
}

impl Mapping {
    /// Merge the enumerable entries of `source` into this mapping.
    ///
    /// This is the recursive step of [`merge_with`] exposed for callers that
    /// already hold a uniquely borrowed mapping. Keys absent from `source`
    /// are untouched and no key is ever removed.
    pub fn merge_from(&mut self, source: &Self, options: MergeOptions) {
        for (key, incoming) in source.iter() {
            let merged = match (self.get(key), incoming) {
                (Some(Node::Sequence(current)), Node::Sequence(extra)) => {
                    options.sequences.combine(current, extra)
                }
                (Some(Node::Mapping(current)), Node::Mapping(nested)) => {
                    let mut copy = current.shallow_copy();
                    copy.merge_from(nested, options);
                    Node::mapping(copy)
                }
                _ => incoming.clone(),
            };
            if let Err(err) = self.assign(key, merged) {
                debug!(key, error = %err, "merge left property unchanged");
            }
        }
    }
}
