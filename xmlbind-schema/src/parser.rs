//! Schema inference from prototype documents.
//!
//! A prototype is an example document whose attribute values and text bodies
//! are type hints rather than data:
//!
//! ```xml
//! <Example>
//!     <node1 nodeCount="1" att1="int" att2="float" att3="string"/>
//!     <node2 att1="string">
//!         <node3 att1="string" att2="string?">string</node3>
//!     </node2>
//! </Example>
//! ```
//!
//! One node type is inferred per tag, merged across all of its occurrences.

use crate::error::ParseError;
use crate::types::{AttributeDef, ChildDef, NodeDef, Occurs, Presence, ScalarKind, Schema};
use std::path::Path;
use xmlbind_core::{Element, ReadConfig, parse_document};

/// Reserved attribute selecting a child's cardinality.
pub const NODE_COUNT_ATTRIBUTE: &str = "nodeCount";

/// Infers a schema from a prototype document.
///
/// # Errors
/// Returns `ParseError` if the document is malformed or a `nodeCount` value
/// is not a non-negative integer.
pub fn parse_prototype(xml: &str) -> Result<Schema, ParseError> {
    let root = parse_document(xml, &ReadConfig::trimmed())?;
    let mut schema = Schema::new(root.name());
    collect_node(&mut schema, &root)?;
    tracing::debug!(
        "Inferred schema '{}' with {} node types",
        schema.root,
        schema.nodes.len()
    );
    Ok(schema)
}

/// Reads a prototype file and infers its schema.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_prototype_file(path: impl AsRef<Path>) -> Result<Schema, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_prototype(&xml)
}

/// Splits a sample value into its kind and presence.
///
/// `int`, `float` and `string` (any case) select the kind; a trailing `?`
/// marks the member optional. Anything else is required text.
#[must_use]
pub fn parse_hint(sample: &str) -> (ScalarKind, Presence) {
    let sample = sample.trim();
    let (name, presence) = match sample.strip_suffix('?') {
        Some(name) => (name, Presence::Optional),
        None => (sample, Presence::Required),
    };
    match ScalarKind::from_hint(name) {
        Some(kind) => (kind, presence),
        None => (ScalarKind::Text, Presence::Required),
    }
}

fn collect_node(schema: &mut Schema, element: &Element) -> Result<(), ParseError> {
    let mut observed = NodeDef::new(element.name());

    for attr in element.attributes() {
        if attr.name == NODE_COUNT_ATTRIBUTE {
            continue;
        }
        let (kind, presence) = parse_hint(&attr.value);
        observed.attributes.push(AttributeDef {
            name: attr.name.clone(),
            kind,
            presence,
        });
    }

    if !element.text().is_empty() {
        observed.text = Some(parse_hint(element.text()).0);
    }

    // Explicit counts win over repetition.
    let mut explicit: Vec<bool> = Vec::new();
    for child in element.children() {
        let count = node_count(child)?;
        let position = observed.children.iter().position(|c| c.tag == child.name());
        match (position, count) {
            (Some(idx), Some(count)) => {
                observed.children[idx].occurs = Occurs::from_node_count(count);
                explicit[idx] = true;
            }
            (Some(idx), None) => {
                if !explicit[idx] {
                    observed.children[idx].occurs = Occurs::Many;
                }
            }
            (None, count) => {
                let mut def = ChildDef::single(child.name());
                if let Some(count) = count {
                    def.occurs = Occurs::from_node_count(count);
                }
                observed.children.push(def);
                explicit.push(count.is_some());
            }
        }
        collect_node(schema, child)?;
    }

    match schema.get_node_mut(element.name()) {
        Some(existing) => merge_node(existing, observed),
        None => schema.add_node(observed),
    }
    Ok(())
}

fn node_count(element: &Element) -> Result<Option<u32>, ParseError> {
    element
        .attribute(NODE_COUNT_ATTRIBUTE)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| ParseError::invalid_attr(element.name(), NODE_COUNT_ATTRIBUTE, raw))
        })
        .transpose()
}

/// Folds a later occurrence of a tag into the definition seen so far.
fn merge_node(existing: &mut NodeDef, observed: NodeDef) {
    for attr in observed.attributes {
        match existing.attributes.iter_mut().find(|a| a.name == attr.name) {
            Some(known) => {
                known.kind = known.kind.widen(attr.kind);
                if attr.is_optional() {
                    known.presence = Presence::Optional;
                }
            }
            None => existing.attributes.push(attr),
        }
    }

    existing.text = match (existing.text, observed.text) {
        (Some(a), Some(b)) => Some(a.widen(b)),
        (a, b) => a.or(b),
    };

    for child in observed.children {
        match existing.children.iter_mut().find(|c| c.tag == child.tag) {
            Some(known) => {
                if child.occurs.is_many() {
                    known.occurs = Occurs::Many;
                }
            }
            None => existing.children.push(child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPED_PROTOTYPE: &str = r#"<?xml version="1.0"?>
<Example>
    <node1 nodeCount="1" att1="int" att2="float" att3="string"/>
    <node2 nodeCount="2" att1="string">
        <node3 nodeCount="2" att1="string" att2="string?">string</node3>
    </node2>
    <node4 nodeCount="2" att1="string?">
        <node5 nodeCount="2">int</node5>
    </node4>
</Example>"#;

    #[test]
    fn test_parse_typed_prototype() {
        let schema = parse_prototype(TYPED_PROTOTYPE).unwrap();
        assert_eq!(schema.root, "Example");
        assert_eq!(schema.nodes.len(), 6);

        let root = schema.root_node().unwrap();
        let tags: Vec<_> = root
            .children
            .iter()
            .map(|c| (c.tag.as_str(), c.occurs))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("node1", Occurs::Single),
                ("node2", Occurs::Many),
                ("node4", Occurs::Many)
            ]
        );

        let node1 = schema.get_node("node1").unwrap();
        assert_eq!(node1.attributes.len(), 3);
        assert_eq!(node1.get_attribute("att1").unwrap().kind, ScalarKind::Int);
        assert_eq!(node1.get_attribute("att2").unwrap().kind, ScalarKind::Float);
        assert_eq!(node1.get_attribute("att3").unwrap().kind, ScalarKind::Text);
        assert_eq!(node1.text, None);

        let node3 = schema.get_node("node3").unwrap();
        assert!(node3.get_attribute("att2").unwrap().is_optional());
        assert_eq!(node3.text, Some(ScalarKind::Text));

        assert_eq!(
            schema.get_node("node5").unwrap().text,
            Some(ScalarKind::Int)
        );
    }

    #[test]
    fn test_repetition_implies_collection() {
        let schema = parse_prototype("<list><item a=\"x\"/><item a=\"y\"/><head/></list>").unwrap();
        let list = schema.get_node("list").unwrap();
        assert_eq!(list.get_child("item").unwrap().occurs, Occurs::Many);
        assert_eq!(list.get_child("head").unwrap().occurs, Occurs::Single);
    }

    #[test]
    fn test_explicit_count_overrides_repetition() {
        let schema = parse_prototype("<r><c nodeCount=\"1\"/><c/></r>").unwrap();
        assert_eq!(
            schema.get_node("r").unwrap().children[0].occurs,
            Occurs::Single
        );
    }

    #[test]
    fn test_occurrences_are_merged() {
        let xml = r#"<r>
            <c a="int"/>
            <c a="float" b="string?">int</c>
        </r>"#;
        let schema = parse_prototype(xml).unwrap();
        let c = schema.get_node("c").unwrap();
        assert_eq!(c.get_attribute("a").unwrap().kind, ScalarKind::Float);
        assert!(c.get_attribute("b").unwrap().is_optional());
        assert_eq!(c.text, Some(ScalarKind::Int));
    }

    #[test]
    fn test_invalid_node_count() {
        let result = parse_prototype("<r><c nodeCount=\"many\"/></r>");
        assert!(matches!(
            result,
            Err(ParseError::InvalidAttribute { ref attribute, .. }) if attribute == NODE_COUNT_ATTRIBUTE
        ));
    }

    #[test]
    fn test_malformed_prototype() {
        assert!(matches!(parse_prototype("<r>"), Err(ParseError::Document(_))));
    }

    #[test]
    fn test_parse_hint() {
        assert_eq!(parse_hint("INT"), (ScalarKind::Int, Presence::Required));
        assert_eq!(
            parse_hint("float?"),
            (ScalarKind::Float, Presence::Optional)
        );
        assert_eq!(parse_hint("cat"), (ScalarKind::Text, Presence::Required));
        assert_eq!(parse_hint("cat?"), (ScalarKind::Text, Presence::Required));
    }

    #[test]
    fn test_parse_prototype_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proto.xml");
        std::fs::write(&path, TYPED_PROTOTYPE).unwrap();
        let schema = parse_prototype_file(&path).unwrap();
        assert!(schema.has_node("node5"));

        assert!(matches!(
            parse_prototype_file(dir.path().join("missing.xml")),
            Err(ParseError::Io(_))
        ));
    }
}
