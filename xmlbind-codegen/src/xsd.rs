//! XSD generation.
//!
//! Every node type except the root becomes a named `complexType`
//! (`tn_<node>`); the root is declared as a top-level `xs:element` with an
//! inline complex type. The document is built as an [`Element`] tree and
//! serialized with the same writer used for data documents.

use crate::error::CodegenError;
use xmlbind_core::{Element, Indent, WriteConfig, write_document_string};
use xmlbind_schema::{NodeDef, Occurs, Schema};

/// XML Schema namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Prefix of generated complex type names.
pub const TYPE_PREFIX: &str = "tn_";

/// Generator for XSD documents.
pub struct XsdGenerator<'a> {
    schema: &'a Schema,
    indent: Indent,
}

impl<'a> XsdGenerator<'a> {
    /// Creates a new XSD generator indenting with four spaces.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            indent: Indent {
                fill: b' ',
                width: 4,
            },
        }
    }

    /// Sets the indentation.
    #[must_use]
    pub fn with_indent(mut self, fill: u8, width: usize) -> Self {
        self.indent = Indent { fill, width };
        self
    }

    /// Generates the XSD document.
    ///
    /// # Errors
    /// Returns `CodegenError` if the root node is not defined or
    /// serialization fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let root = self.schema.root_node().ok_or_else(|| {
            CodegenError::generation(format!("root node '{}' is not defined", self.schema.root))
        })?;

        let mut document = Element::new("xs:schema");
        document.set_attribute("xmlns:xs", XSD_NAMESPACE);

        let root_referenced = self
            .schema
            .nodes
            .iter()
            .flat_map(|n| &n.children)
            .any(|c| c.node_type == root.name);

        for node in &self.schema.nodes {
            if node.name == root.name && !root_referenced {
                continue;
            }
            let complex = document.append_child("xs:complexType");
            complex.set_attribute("name", type_name(&node.name));
            fill_content(complex, node);
        }

        let element = document.append_child("xs:element");
        element.set_attribute("name", root.name.as_str());
        fill_content(element.append_child("xs:complexType"), root);

        let config = WriteConfig {
            indent: Some(self.indent),
        };
        Ok(write_document_string(&document, &config)?)
    }
}

fn type_name(node: &str) -> String {
    format!("{TYPE_PREFIX}{node}")
}

/// Writes the content model of a node into a `complexType` element.
///
/// Text-only nodes get `simpleContent`; text alongside children is declared
/// as mixed content.
fn fill_content(complex: &mut Element, node: &NodeDef) {
    let attributes_parent = match node.text {
        Some(kind) if node.children.is_empty() => {
            let extension = complex
                .append_child("xs:simpleContent")
                .append_child("xs:extension");
            extension.set_attribute("base", kind.xsd_type());
            extension
        }
        text => {
            if text.is_some() {
                complex.set_attribute("mixed", "true");
            }
            if !node.children.is_empty() {
                let sequence = complex.append_child("xs:sequence");
                for child in &node.children {
                    let (min, max) = match child.occurs {
                        Occurs::Single => ("1", "1"),
                        Occurs::Many => ("0", "unbounded"),
                    };
                    let element = sequence.append_child("xs:element");
                    element.set_attribute("name", child.tag.as_str());
                    element.set_attribute("type", type_name(&child.node_type));
                    element.set_attribute("minOccurs", min);
                    element.set_attribute("maxOccurs", max);
                }
            }
            complex
        }
    };

    for attr in &node.attributes {
        let element = attributes_parent.append_child("xs:attribute");
        element.set_attribute("name", attr.name.as_str());
        element.set_attribute("type", attr.kind.xsd_type());
        element.set_attribute("use", attr.presence.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmlbind_core::{ReadConfig, parse_document};
    use xmlbind_schema::{AttributeDef, ChildDef, ScalarKind};

    fn schema() -> Schema {
        Schema::new("Example")
            .with_node(
                NodeDef::new("Example")
                    .child(ChildDef::single("node1"))
                    .child(ChildDef::many("node2")),
            )
            .with_node(
                NodeDef::new("node1")
                    .attribute(AttributeDef::new("att1", ScalarKind::Int))
                    .attribute(AttributeDef::new("att2", ScalarKind::Float)),
            )
            .with_node(
                NodeDef::new("node2")
                    .attribute(AttributeDef::optional("att1", ScalarKind::Text))
                    .child(ChildDef::many("node3")),
            )
            .with_node(NodeDef::new("node3").text(ScalarKind::Int))
    }

    fn generated() -> Element {
        let xsd = XsdGenerator::new(&schema()).generate().unwrap();
        parse_document(&xsd, &ReadConfig::default()).unwrap()
    }

    fn attributes<'a, const N: usize>(element: &'a Element, names: [&str; N]) -> [&'a str; N] {
        names.map(|name| element.attribute(name).unwrap_or(""))
    }

    fn complex_type<'a>(xsd: &'a Element, name: &str) -> &'a Element {
        xsd.children_named("xs:complexType")
            .find(|c| c.attribute("name") == Some(name))
            .unwrap()
    }

    #[test]
    fn test_schema_element() {
        let xsd = generated();
        assert_eq!(xsd.name(), "xs:schema");
        assert_eq!(xsd.attribute("xmlns:xs"), Some(XSD_NAMESPACE));
        assert_eq!(xsd.children_named("xs:complexType").count(), 3);
        assert!(complex_type(&xsd, "tn_node1").has_attribute("name"));
    }

    #[test]
    fn test_attributes_typed() {
        let xsd = generated();
        let attrs: Vec<_> = complex_type(&xsd, "tn_node1")
            .children_named("xs:attribute")
            .map(|a| attributes(a, ["name", "type", "use"]))
            .collect();
        assert_eq!(
            attrs,
            vec![
                ["att1", "xs:int", "required"],
                ["att2", "xs:float", "required"],
            ]
        );

        let node2 = complex_type(&xsd, "tn_node2");
        let att1 = node2.child("xs:attribute").unwrap();
        assert_eq!(att1.attribute("use"), Some("optional"));
    }

    #[test]
    fn test_simple_content_for_text() {
        let xsd = generated();
        let extension = complex_type(&xsd, "tn_node3")
            .child("xs:simpleContent")
            .and_then(|s| s.child("xs:extension"))
            .unwrap();
        assert_eq!(extension.attribute("base"), Some("xs:int"));
    }

    #[test]
    fn test_root_element_with_sequence() {
        let xsd = generated();
        let root = xsd.child("xs:element").unwrap();
        assert_eq!(root.attribute("name"), Some("Example"));

        let elements: Vec<_> = root
            .child("xs:complexType")
            .and_then(|c| c.child("xs:sequence"))
            .unwrap()
            .children()
            .iter()
            .map(|e| attributes(e, ["name", "type", "minOccurs", "maxOccurs"]))
            .collect();
        assert_eq!(
            elements,
            vec![
                ["node1", "tn_node1", "1", "1"],
                ["node2", "tn_node2", "0", "unbounded"],
            ]
        );
    }

    #[test]
    fn test_mixed_content() {
        let schema = Schema::new("r")
            .with_node(
                NodeDef::new("r")
                    .text(ScalarKind::Text)
                    .child(ChildDef::many("c")),
            )
            .with_node(NodeDef::new("c"));
        let xsd = XsdGenerator::new(&schema).generate().unwrap();
        assert!(xsd.contains("<xs:complexType mixed=\"true\">"));
    }

    #[test]
    fn test_recursive_root_gets_named_type() {
        let schema =
            Schema::new("tree").with_node(NodeDef::new("tree").child(ChildDef::many("tree")));
        let xsd = XsdGenerator::new(&schema).generate().unwrap();
        assert!(xsd.contains("<xs:complexType name=\"tn_tree\">"));
    }

    #[test]
    fn test_missing_root() {
        let schema = Schema::new("missing");
        assert!(matches!(
            XsdGenerator::new(&schema).generate(),
            Err(CodegenError::Generation { .. })
        ));
    }
}
