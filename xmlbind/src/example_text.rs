//! Text-only `Example` document, run through the generic tree engine.
//!
//! Same tags as [`example`](crate::example), but every attribute and text
//! value is a string and always written. Load failures are returned without
//! being logged.

use std::sync::Arc;
use xmlbind_core::BoundFileBuilder;
use xmlbind_schema::{
    AttributeDef, ChildDef, DynamicDocument, DynamicFile, NodeDef, ScalarKind, Schema, SchemaError,
};

/// Prototype this schema is inferred from.
pub const PROTOTYPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Example>
    <node1 nodeCount="1" att1="string" att2="string" att3="string"/>
    <node2 nodeCount="2" att1="string">
        <node3 nodeCount="2" att1="string" att2="string">string</node3>
    </node2>
    <node4 nodeCount="2" att1="string">
        <node5 nodeCount="2">string</node5>
    </node4>
    <node6 nodeCount="2" att1="string">
        <node7 nodeCount="2">string</node7>
    </node6>
</Example>
"#;

fn text_attribute(name: &str) -> AttributeDef {
    AttributeDef::new(name, ScalarKind::Text)
}

/// Builds the text-only `Example` schema.
#[must_use]
pub fn schema() -> Schema {
    Schema::new("Example")
        .with_node(
            NodeDef::new("Example")
                .child(ChildDef::single("node1"))
                .child(ChildDef::many("node2"))
                .child(ChildDef::many("node4"))
                .child(ChildDef::many("node6")),
        )
        .with_node(
            NodeDef::new("node1")
                .attribute(text_attribute("att1"))
                .attribute(text_attribute("att2"))
                .attribute(text_attribute("att3")),
        )
        .with_node(
            NodeDef::new("node2")
                .attribute(text_attribute("att1"))
                .child(ChildDef::many("node3")),
        )
        .with_node(
            NodeDef::new("node3")
                .attribute(text_attribute("att1"))
                .attribute(text_attribute("att2"))
                .text(ScalarKind::Text),
        )
        .with_node(
            NodeDef::new("node4")
                .attribute(text_attribute("att1"))
                .child(ChildDef::many("node5")),
        )
        .with_node(NodeDef::new("node5").text(ScalarKind::Text))
        .with_node(
            NodeDef::new("node6")
                .attribute(text_attribute("att1"))
                .child(ChildDef::many("node7")),
        )
        .with_node(NodeDef::new("node7").text(ScalarKind::Text))
}

/// Creates an empty text-only `Example` document.
///
/// # Errors
/// Returns `SchemaError` if the schema fails validation.
pub fn new_document() -> Result<DynamicDocument, SchemaError> {
    DynamicDocument::new(Arc::new(schema()))
}

/// Creates a file adapter for an empty text-only `Example` document.
///
/// # Errors
/// Returns `SchemaError` if the schema fails validation.
pub fn new_file() -> Result<DynamicFile, SchemaError> {
    Ok(BoundFileBuilder::new()
        .report_errors(false)
        .build(new_document()?))
}
