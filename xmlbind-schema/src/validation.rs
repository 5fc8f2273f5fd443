//! Schema validation utilities.
//!
//! This module checks that a schema describes a finite, well-formed tree and
//! that it can be turned into Rust bindings without name clashes.

use crate::error::SchemaError;
use crate::ir::{TEXT_FIELD, to_field_name, to_pascal_case};
use crate::types::{NodeDef, Occurs, Schema};
use std::collections::{HashMap, HashSet};

/// Validates a schema for correctness.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_nodes(schema)?;
    if !schema.has_node(&schema.root) {
        return Err(SchemaError::TypeNotFound {
            name: schema.root.clone(),
        });
    }
    for node in &schema.nodes {
        validate_node(schema, node)?;
    }
    validate_singleton_cycles(schema)?;
    Ok(())
}

/// Checks node names and the struct names derived from them are unique.
fn validate_nodes(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();
    let mut seen_structs: HashMap<String, &str> = HashMap::new();

    for node in &schema.nodes {
        if !seen_names.insert(node.name.as_str()) {
            return Err(SchemaError::duplicate("node", &node.name));
        }
        let struct_name = to_pascal_case(&node.name);
        if let Some(other) = seen_structs.insert(struct_name.clone(), &node.name) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Nodes '{}' and '{}' both map to struct '{}'",
                    other, node.name, struct_name
                ),
            });
        }
    }
    Ok(())
}

/// Validates the members of one node definition.
fn validate_node(schema: &Schema, node: &NodeDef) -> Result<(), SchemaError> {
    let mut seen_attributes = HashSet::new();
    let mut seen_tags = HashSet::new();
    let mut seen_fields = HashSet::new();

    for attr in &node.attributes {
        if !seen_attributes.insert(attr.name.as_str()) {
            return Err(SchemaError::duplicate("attribute", format!("{}@{}", node.name, attr.name)));
        }
        check_field(node, &mut seen_fields, to_field_name(&attr.name))?;
    }

    if node.text.is_some() {
        check_field(node, &mut seen_fields, TEXT_FIELD.to_string())?;
    }

    for child in &node.children {
        if !seen_tags.insert(child.tag.as_str()) {
            return Err(SchemaError::duplicate("child", format!("{}/{}", node.name, child.tag)));
        }
        if !schema.has_node(&child.node_type) {
            return Err(SchemaError::TypeNotFound {
                name: child.node_type.clone(),
            });
        }
        check_field(node, &mut seen_fields, to_field_name(&child.tag))?;
    }

    Ok(())
}

fn check_field(
    node: &NodeDef,
    seen: &mut HashSet<String>,
    field: String,
) -> Result<(), SchemaError> {
    if seen.contains(&field) {
        return Err(SchemaError::FieldCollision {
            node: node.name.clone(),
            field,
        });
    }
    seen.insert(field);
    Ok(())
}

/// Rejects cycles made only of singleton children, which would require an
/// infinitely deep default value. Collections may recurse.
fn validate_singleton_cycles(schema: &Schema) -> Result<(), SchemaError> {
    let mut done = HashSet::new();
    for node in &schema.nodes {
        let mut path = Vec::new();
        visit_singletons(schema, &node.name, &mut path, &mut done)?;
    }
    Ok(())
}

fn visit_singletons<'a>(
    schema: &'a Schema,
    name: &'a str,
    path: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
) -> Result<(), SchemaError> {
    if done.contains(name) {
        return Ok(());
    }
    if let Some(start) = path.iter().position(|n| *n == name) {
        let mut cycle: Vec<&str> = path[start..].to_vec();
        cycle.push(name);
        return Err(SchemaError::CircularReference {
            path: cycle.join(" -> "),
        });
    }

    path.push(name);
    if let Some(node) = schema.get_node(name) {
        for child in &node.children {
            if child.occurs == Occurs::Single {
                visit_singletons(schema, &child.node_type, path, done)?;
            }
        }
    }
    path.pop();
    done.insert(name);
    Ok(())
}
