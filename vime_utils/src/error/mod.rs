//! Error types produced by property definition and document loading.

mod constructors;
mod types;

pub use types::UtilsError;

/// Result alias used throughout the crate.
pub type UtilsResult<T> = Result<T, UtilsError>;
