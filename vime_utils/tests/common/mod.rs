//! Shared helpers for integration tests.

use anyhow::{Context, Result};
use vime_utils::Node;

/// Parse `text` as a JSON document, attaching the source text on failure.
pub fn document(text: &str) -> Result<Node> {
    Node::from_json_str(text).with_context(|| format!("invalid test document: {text}"))
}
