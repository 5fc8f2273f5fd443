//! Intermediate representation for code generation.
//!
//! The IR resolves a [`Schema`] into the names and types a binding generator
//! needs, with nodes ordered so every struct follows the structs it contains.

use crate::types::{NodeDef, Occurs, ScalarKind, Schema};
use std::collections::HashSet;

/// Field name used for a node's text value.
pub const TEXT_FIELD: &str = "text";

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Root node name, which is also the document's root tag.
    pub root: String,
    /// Root struct name.
    pub root_struct: String,
    /// Resolved nodes, children before parents.
    pub nodes: Vec<ResolvedNode>,
}

impl SchemaIr {
    /// Creates IR from a schema.
    ///
    /// The schema should have passed [`validate_schema`](crate::validate_schema);
    /// unresolved children are skipped when ordering.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let mut order = Vec::with_capacity(schema.nodes.len());
        let mut visited = HashSet::new();

        visit(schema, &schema.root, &mut visited, &mut order);
        for node in &schema.nodes {
            visit(schema, &node.name, &mut visited, &mut order);
        }

        let nodes = order
            .into_iter()
            .map(|def| ResolvedNode::from_def(def, def.name == schema.root))
            .collect();

        Self {
            root: schema.root.clone(),
            root_struct: to_pascal_case(&schema.root),
            nodes,
        }
    }

    /// Gets a resolved node by name.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&ResolvedNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Gets the resolved root node.
    #[must_use]
    pub fn root_node(&self) -> Option<&ResolvedNode> {
        self.get_node(&self.root)
    }
}

fn visit<'a>(
    schema: &'a Schema,
    name: &str,
    visited: &mut HashSet<String>,
    order: &mut Vec<&'a NodeDef>,
) {
    if !visited.insert(name.to_string()) {
        return;
    }
    let Some(def) = schema.get_node(name) else {
        return;
    };
    for child in &def.children {
        visit(schema, &child.node_type, visited, order);
    }
    order.push(def);
}

/// Resolved node ready for code generation.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    /// Node name, also its element tag.
    pub name: String,
    /// Rust struct name.
    pub struct_name: String,
    /// Resolved attributes.
    pub attributes: Vec<ResolvedAttribute>,
    /// Resolved text value.
    pub text: Option<ResolvedText>,
    /// Resolved children.
    pub children: Vec<ResolvedChild>,
    /// Whether this node is the document root.
    pub is_root: bool,
}

impl ResolvedNode {
    fn from_def(def: &NodeDef, is_root: bool) -> Self {
        Self {
            name: def.name.clone(),
            struct_name: to_pascal_case(&def.name),
            attributes: def
                .attributes
                .iter()
                .map(|a| ResolvedAttribute {
                    name: a.name.clone(),
                    field_name: to_field_name(&a.name),
                    kind: a.kind,
                    rust_type: a.kind.rust_type().to_string(),
                    is_optional: a.is_optional(),
                })
                .collect(),
            text: def.text.map(|kind| ResolvedText {
                field_name: TEXT_FIELD.to_string(),
                kind,
                rust_type: kind.rust_type().to_string(),
            }),
            children: def
                .children
                .iter()
                .map(|c| {
                    let struct_name = to_pascal_case(&c.node_type);
                    let rust_type = match c.occurs {
                        Occurs::Single => struct_name.clone(),
                        Occurs::Many => format!("Vec<{struct_name}>"),
                    };
                    ResolvedChild {
                        tag: c.tag.clone(),
                        field_name: to_field_name(&c.tag),
                        struct_name,
                        occurs: c.occurs,
                        rust_type,
                    }
                })
                .collect(),
            is_root,
        }
    }
}

/// Resolved attribute.
#[derive(Debug, Clone)]
pub struct ResolvedAttribute {
    /// Attribute name in XML.
    pub name: String,
    /// Rust field name.
    pub field_name: String,
    /// Scalar kind.
    pub kind: ScalarKind,
    /// Rust type.
    pub rust_type: String,
    /// Whether the attribute is omitted when empty.
    pub is_optional: bool,
}

/// Resolved text value.
#[derive(Debug, Clone)]
pub struct ResolvedText {
    /// Rust field name.
    pub field_name: String,
    /// Scalar kind.
    pub kind: ScalarKind,
    /// Rust type.
    pub rust_type: String,
}

/// Resolved child.
#[derive(Debug, Clone)]
pub struct ResolvedChild {
    /// Element tag.
    pub tag: String,
    /// Rust field name.
    pub field_name: String,
    /// Struct name of the child node type.
    pub struct_name: String,
    /// Cardinality.
    pub occurs: Occurs,
    /// Rust type of the field.
    pub rust_type: String,
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Converts an XML name to a Rust field identifier.
///
/// Keywords become raw identifiers; names that cannot be raw get a trailing
/// underscore.
#[must_use]
pub fn to_field_name(s: &str) -> String {
    let mut name: String = to_snake_case(s)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    match name.as_str() {
        "self" | "super" | "crate" | "_" => format!("{name}_"),
        n if KEYWORDS.contains(&n) => format!("r#{name}"),
        _ => name,
    }
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, 'N');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttributeDef, ChildDef};

    fn example_schema() -> Schema {
        Schema::new("Example")
            .with_node(
                NodeDef::new("Example")
                    .child(ChildDef::single("node1"))
                    .child(ChildDef::many("node2")),
            )
            .with_node(
                NodeDef::new("node2")
                    .attribute(AttributeDef::new("att1", ScalarKind::Text))
                    .child(ChildDef::many("node3")),
            )
            .with_node(
                NodeDef::new("node3")
                    .attribute(AttributeDef::optional("att2", ScalarKind::Text))
                    .text(ScalarKind::Text),
            )
            .with_node(NodeDef::new("node1").attribute(AttributeDef::new("att1", ScalarKind::Int)))
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("nodeCount"), "node_count");
        assert_eq!(to_snake_case("att1"), "att1");
        assert_eq!(to_snake_case("MDEntryPx"), "m_d_entry_px");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("node1"), "Node1");
        assert_eq!(to_pascal_case("my-node"), "MyNode");
        assert_eq!(to_pascal_case("ns:item.list"), "NsItemList");
        assert_eq!(to_pascal_case("1st"), "N1st");
    }

    #[test]
    fn test_to_field_name() {
        assert_eq!(to_field_name("att1"), "att1");
        assert_eq!(to_field_name("type"), "r#type");
        assert_eq!(to_field_name("self"), "self_");
        assert_eq!(to_field_name("xml:lang"), "xml_lang");
        assert_eq!(to_field_name("2nd"), "_2nd");
    }

    #[test]
    fn test_ir_children_before_parents() {
        let ir = SchemaIr::from_schema(&example_schema());
        let order: Vec<_> = ir.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(order, vec!["node1", "node3", "node2", "Example"]);
        assert_eq!(ir.root_struct, "Example");
        assert!(ir.root_node().unwrap().is_root);
    }

    #[test]
    fn test_ir_resolves_types() {
        let ir = SchemaIr::from_schema(&example_schema());

        let root = ir.root_node().unwrap();
        assert_eq!(root.children[0].rust_type, "Node1");
        assert_eq!(root.children[1].rust_type, "Vec<Node2>");

        let node1 = ir.get_node("node1").unwrap();
        assert_eq!(node1.attributes[0].rust_type, "i32");

        let node3 = ir.get_node("node3").unwrap();
        assert!(node3.attributes[0].is_optional);
        assert_eq!(node3.text.as_ref().unwrap().rust_type, "String");
    }

    #[test]
    fn test_ir_includes_unreachable_nodes() {
        let schema = example_schema().with_node(NodeDef::new("orphan"));
        let ir = SchemaIr::from_schema(&schema);
        assert_eq!(ir.nodes.last().unwrap().name, "orphan");
    }
}
