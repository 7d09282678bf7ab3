//! Constructors for `UtilsError`.

use super::UtilsError;

impl UtilsError {
    /// Construct a [`UtilsError::NonConfigurable`] for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vime_utils::UtilsError;
    /// let err = UtilsError::non_configurable("volume");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "cannot redefine non-configurable property 'volume'"
    /// );
    /// ```
    #[must_use]
    pub fn non_configurable(key: impl Into<String>) -> Self {
        Self::NonConfigurable { key: key.into() }
    }

    /// Construct a [`UtilsError::ReadOnly`] for `key`.
    #[must_use]
    pub fn read_only(key: impl Into<String>) -> Self {
        Self::ReadOnly { key: key.into() }
    }

    /// Construct an options error from a [`serde_json::Error`].
    ///
    /// Use this instead of the `From` conversion when the failure stems from
    /// deserialising [`crate::MergeOptions`] rather than from parsing a
    /// document, so callers can tell the two apart.
    #[must_use]
    pub const fn invalid_options(source: serde_json::Error) -> Self {
        Self::InvalidOptions { source }
    }

    /// Returns the property key involved in the failure, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NonConfigurable { key } | Self::ReadOnly { key } => Some(key),
            Self::Json(_) | Self::InvalidOptions { .. } => None,
        }
    }
}
