//! Options controlling how merges combine sequences.

use std::sync::Arc;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{UtilsError, UtilsResult};
use crate::node::Node;

/// How two sequences found under the same key are combined.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SequenceStrategy {
    /// Concatenate target items followed by source items.
    #[default]
    Append,
    /// Take the source sequence wholesale.
    Replace,
}

impl SequenceStrategy {
    pub(crate) fn combine(self, current: &[Node], incoming: &Arc<Vec<Node>>) -> Node {
        match self {
            Self::Append => Node::sequence(current.iter().chain(incoming.iter()).cloned()),
            Self::Replace => Node::Sequence(Arc::clone(incoming)),
        }
    }
}

/// Settings for [`crate::merge_with`] and [`crate::merge_layers`].
///
/// The defaults reproduce [`crate::merge_obj_deep`]. Options deserialise from
/// a JSON object so callers can keep them alongside the rest of their
/// configuration:
///
/// ```
/// use vime_utils::{MergeOptions, SequenceStrategy};
/// use serde_json::json;
///
/// let options = MergeOptions::from_value(json!({"sequences": "replace"}))?;
/// assert_eq!(options.sequences, SequenceStrategy::Replace);
/// assert_eq!(MergeOptions::from_value(json!({}))?, MergeOptions::default());
/// # Ok::<_, vime_utils::UtilsError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct MergeOptions {
    /// Strategy for sequences present on both sides.
    pub sequences: SequenceStrategy,
}

impl MergeOptions {
    /// Options matching [`crate::merge_obj_deep`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequences: SequenceStrategy::Append,
        }
    }

    /// Replace the sequence strategy.
    #[must_use]
    pub const fn with_sequences(mut self, strategy: SequenceStrategy) -> Self {
        self.sequences = strategy;
        self
    }

    /// Deserialise options from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidOptions`] when `value` is not a JSON
    /// object, or for unknown keys or unknown strategy names.
    pub fn from_value(value: Value) -> UtilsResult<Self> {
        let unexpected = match &value {
            Value::Object(_) => None,
            Value::Array(_) => Some(Unexpected::Seq),
            Value::Null => Some(Unexpected::Unit),
            Value::Bool(flag) => Some(Unexpected::Bool(*flag)),
            Value::Number(_) => Some(Unexpected::Other("number")),
            Value::String(text) => Some(Unexpected::Str(text)),
        };
        if let Some(found) = unexpected {
            let err = serde_json::Error::invalid_type(found, &"a JSON object");
            return Err(UtilsError::invalid_options(err));
        }
        serde_json::from_value(value).map_err(UtilsError::invalid_options)
    }
}
