//! Steps driving the deep merge scenarios.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use serde_json::Value;
use vime_utils::{MergeOptions, Node, PropertyDescriptor, SequenceStrategy, merge_with};

use crate::fixtures::MergeState;

fn parse(document: &str) -> Result<Node> {
    Ok(Node::from_json_str(document.trim())?)
}

/// Clones the shared source handle; containers are reference counted.
fn source_document_of(merge_state: &MergeState) -> Result<Node> {
    merge_state
        .source
        .with_ref(Node::clone)
        .ok_or_else(|| anyhow!("source document unavailable"))
}

fn redefine(slot_value: Option<Node>, key: &str, descriptor: PropertyDescriptor) -> Result<Node> {
    let mut node = slot_value.ok_or_else(|| anyhow!("document must be set before {key}"))?;
    let mapping = node
        .as_mapping_mut()
        .ok_or_else(|| anyhow!("document must be a mapping to redefine {key}"))?;
    let value = mapping
        .get(key)
        .cloned()
        .ok_or_else(|| anyhow!("document has no key {key}"))?;
    mapping.define_property(key, descriptor.with_value(value))?;
    Ok(node)
}

#[given("the target document {document}")]
fn target_document(merge_state: &MergeState, document: String) -> Result<()> {
    ensure!(merge_state.target.is_empty(), "target already set");
    merge_state.target.set(parse(&document)?);
    Ok(())
}

#[given("the source document {document}")]
fn source_document(merge_state: &MergeState, document: String) -> Result<()> {
    ensure!(merge_state.source.is_empty(), "source already set");
    merge_state.source.set(parse(&document)?);
    Ok(())
}

#[given("the target key {key} is read-only")]
fn target_key_read_only(merge_state: &MergeState, key: String) -> Result<()> {
    let descriptor = PropertyDescriptor::new().with_writable(false);
    let node = redefine(merge_state.target.take(), &key, descriptor)?;
    merge_state.target.set(node);
    Ok(())
}

#[given("the source key {key} is not enumerable")]
fn source_key_hidden(merge_state: &MergeState, key: String) -> Result<()> {
    let descriptor = PropertyDescriptor::new().with_enumerable(false);
    let node = redefine(merge_state.source.take(), &key, descriptor)?;
    merge_state.source.set(node);
    Ok(())
}

#[given("sequences are merged with the {strategy} strategy")]
fn sequence_strategy(merge_state: &MergeState, strategy: String) -> Result<()> {
    let sequences = match strategy.as_str() {
        "append" => SequenceStrategy::Append,
        "replace" => SequenceStrategy::Replace,
        other => return Err(anyhow!("unknown sequence strategy '{other}'")),
    };
    merge_state
        .options
        .set(MergeOptions::new().with_sequences(sequences));
    Ok(())
}

#[when("the documents are merged")]
fn merge_documents(merge_state: &MergeState) -> Result<()> {
    let target = merge_state
        .target
        .take()
        .ok_or_else(|| anyhow!("target document unavailable"))?;
    let options = merge_state.options.with_ref(|options| *options).unwrap_or_default();
    let source = source_document_of(merge_state)?;
    merge_state.result.set(merge_with(target, &source, options));
    Ok(())
}

#[when("the source is merged again")]
fn merge_again(merge_state: &MergeState) -> Result<()> {
    let previous = merge_state
        .result
        .take()
        .ok_or_else(|| anyhow!("no previous merge result"))?;
    let options = merge_state.options.with_ref(|options| *options).unwrap_or_default();
    let source = source_document_of(merge_state)?;
    merge_state.result.set(merge_with(previous, &source, options));
    Ok(())
}

#[then("the result equals {document}")]
fn result_equals(merge_state: &MergeState, document: String) -> Result<()> {
    let expected = Value::from(&parse(&document)?);
    let observed = merge_state
        .result
        .with_ref(|result| Value::from(result))
        .ok_or_else(|| anyhow!("no merge result recorded"))?;
    ensure!(
        observed == expected,
        "expected {expected}, observed {observed}"
    );
    Ok(())
}

#[then("the result is the source itself")]
fn result_is_source(merge_state: &MergeState) -> Result<()> {
    let result = merge_state
        .result
        .take()
        .ok_or_else(|| anyhow!("no merge result recorded"))?;
    let source = source_document_of(merge_state)?;
    ensure!(
        result.same_value(&source),
        "result must share the source container"
    );
    Ok(())
}
