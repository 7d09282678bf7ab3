//! Object helpers for plain data trees.
//!
//! The crate models documents as [`Node`] trees (mappings, sequences and
//! scalars) and provides two helpers over them:
//!
//! - [`create_prop`] defines a property with explicit `writable`,
//!   `enumerable` and `configurable` attributes on a [`Mapping`];
//! - [`merge_obj_deep`] recursively merges one tree into another, appending
//!   sequences, merging nested mappings, and letting the source win on every
//!   other conflict.
//!
//! # Example
//!
//! ```rust
//! use vime_utils::{Node, merge_obj_deep};
//! use serde_json::json;
//!
//! let defaults = Node::from(json!({"controls": {"volume": 50}, "tracks": ["en"]}));
//! let overrides = Node::from(json!({"controls": {"muted": true}, "tracks": ["de"]}));
//!
//! let merged = merge_obj_deep(defaults, &overrides);
//! assert_eq!(
//!     merged,
//!     Node::from(json!({
//!         "controls": {"volume": 50, "muted": true},
//!         "tracks": ["en", "de"],
//!     }))
//! );
//! ```

mod error;
mod merge;
mod node;
mod property;
pub mod unit;

pub use error::{UtilsError, UtilsResult};
pub use merge::{MergeOptions, SequenceStrategy, merge_layers, merge_obj_deep, merge_with};
pub use node::{Mapping, Node, Scalar};
pub use property::{Property, PropertyAttributes, PropertyDescriptor, create_prop};
pub use unit::{NodeKind, classify, is_array, is_object};
