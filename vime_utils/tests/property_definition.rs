//! Integration tests for `create_prop` through the public API.
use anyhow::{Result, ensure};
use serde_json::json;
use vime_utils::{
    Mapping, Node, PropertyAttributes, PropertyDescriptor, UtilsError, create_prop, merge_obj_deep,
};

#[test]
fn definitions_chain_and_hide_keys() -> Result<()> {
    let mut player = Mapping::new();
    create_prop(&mut player, "volume", PropertyDescriptor::open(50_i64))?;
    create_prop(
        &mut player,
        "internal",
        serde_json::from_value(json!({"value": {"ready": true}}))?,
    )?;

    let attributes = player.property("internal").map(|property| property.attributes());
    ensure!(
        attributes == Some(PropertyAttributes::LOCKED),
        "descriptor defaults must lock the key, observed {attributes:?}"
    );
    let visible: Vec<&str> = player.enumerable_keys().collect();
    ensure!(visible == ["volume"], "unexpected enumerable keys {visible:?}");
    ensure!(player.len() == 2, "both keys must be own properties");
    Ok(())
}

fn read_only_id(value: &str) -> Result<Mapping> {
    let mut mapping = Mapping::new();
    create_prop(
        &mut mapping,
        "id",
        PropertyDescriptor::new()
            .with_value(value)
            .with_enumerable(true),
    )?;
    Ok(mapping)
}

#[test]
fn merged_results_honour_defined_attributes() -> Result<()> {
    let target = read_only_id("fixed")?;
    let merged = merge_obj_deep(Node::mapping(target), &Node::from(json!({"id": "x", "n": 1})));

    let mut expected = read_only_id("fixed")?;
    expected.insert("n", 1_i64);
    ensure!(
        merged == Node::mapping(expected),
        "read-only key must keep its value: {merged}"
    );
    Ok(())
}

#[test]
fn refused_redefinitions_surface_the_key() -> Result<()> {
    let mut target = Mapping::new();
    create_prop(&mut target, "id", PropertyDescriptor::new().with_value(1_i64))?;
    let outcome = create_prop(&mut target, "id", PropertyDescriptor::open(2_i64));
    let key = match outcome {
        Err(UtilsError::NonConfigurable { key }) => key,
        other => anyhow::bail!("expected NonConfigurable, got {other:?}"),
    };
    ensure!(key == "id", "unexpected key {key}");
    Ok(())
}
