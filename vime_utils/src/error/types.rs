//! Primary error enum for the object helpers.

use thiserror::Error;

/// Errors raised by the fallible helpers in this crate.
///
/// Merging never fails; these variants cover property definition, ordinary
/// assignment onto read-only properties, and parsing of JSON inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UtilsError {
    /// A non-configurable property rejected a redefinition.
    #[error("cannot redefine non-configurable property '{key}'")]
    NonConfigurable {
        /// Key of the property that refused the change.
        key: String,
    },

    /// Ordinary assignment targeted a property that is not writable.
    #[error("cannot assign to read-only property '{key}'")]
    ReadOnly {
        /// Key of the read-only property.
        key: String,
    },

    /// A JSON document could not be parsed into a node tree.
    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Merge options failed to deserialise.
    #[error("invalid merge options: {source}")]
    InvalidOptions {
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
}
