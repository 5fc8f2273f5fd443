//! Node struct and binding impl generation.

use xmlbind_schema::ir::{ResolvedNode, SchemaIr};
use xmlbind_schema::{Occurs, ScalarKind};

/// Generator for node structs and their `XmlNode` impls.
pub struct NodeGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> NodeGenerator<'a> {
    /// Creates a new node generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all node definitions, children before parents.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for node in &self.ir.nodes {
            output.push_str(&self.generate_struct(node));
            output.push_str(&self.generate_node_impl(node));
            if node.is_root {
                output.push_str(&self.generate_root_impl(node));
            }
        }

        output
    }

    /// Generates the struct definition.
    fn generate_struct(&self, node: &ResolvedNode) -> String {
        let mut output = String::new();

        output.push_str(&format!("/// `{}` element.\n", node.name));
        output.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
        output.push_str(&format!("pub struct {} {{\n", node.struct_name));

        for attr in &node.attributes {
            if attr.is_optional && attr.kind == ScalarKind::Text {
                output.push_str(&format!(
                    "    /// `{}` attribute, omitted when empty.\n",
                    attr.name
                ));
            } else {
                output.push_str(&format!("    /// `{}` attribute.\n", attr.name));
            }
            output.push_str(&format!("    pub {}: {},\n", attr.field_name, attr.rust_type));
        }

        if let Some(text) = &node.text {
            output.push_str("    /// Text content.\n");
            output.push_str(&format!("    pub {}: {},\n", text.field_name, text.rust_type));
        }

        for child in &node.children {
            match child.occurs {
                Occurs::Single => {
                    output.push_str(&format!("    /// `{}` child.\n", child.tag));
                }
                Occurs::Many => {
                    output.push_str(&format!("    /// `{}` children, in order.\n", child.tag));
                }
            }
            output.push_str(&format!("    pub {}: {},\n", child.field_name, child.rust_type));
        }

        output.push_str("}\n\n");
        output
    }

    /// Generates the `XmlNode` impl.
    fn generate_node_impl(&self, node: &ResolvedNode) -> String {
        let mut read = String::new();
        let mut write = String::new();

        for attr in &node.attributes {
            read.push_str(&format!(
                "        self.{} = read_attribute(element, {:?});\n",
                attr.field_name, attr.name
            ));
            if attr.is_optional && attr.kind == ScalarKind::Text {
                write.push_str(&format!(
                    "        write_optional_attribute(element, {:?}, &self.{});\n",
                    attr.name, attr.field_name
                ));
            } else {
                write.push_str(&format!(
                    "        write_attribute(element, {:?}, &self.{});\n",
                    attr.name, attr.field_name
                ));
            }
        }

        if let Some(text) = &node.text {
            read.push_str(&format!("        self.{} = read_text(element);\n", text.field_name));
            write.push_str(&format!("        write_text(element, &self.{});\n", text.field_name));
        }

        for child in &node.children {
            let (reader, writer) = match child.occurs {
                Occurs::Single => ("read_child", "write_child"),
                Occurs::Many => ("read_children", "write_children"),
            };
            read.push_str(&format!(
                "        self.{} = {}(element, {:?});\n",
                child.field_name, reader, child.tag
            ));
            write.push_str(&format!(
                "        {}(element, {:?}, &self.{});\n",
                writer, child.tag, child.field_name
            ));
        }

        // Memberless nodes must not trip unused-variable lints.
        let param = if read.is_empty() { "_element" } else { "element" };

        let mut output = String::new();
        output.push_str(&format!("impl XmlNode for {} {{\n", node.struct_name));
        output.push_str(&format!("    fn read(&mut self, {param}: &Element) {{\n"));
        output.push_str(&read);
        output.push_str("    }\n\n");
        output.push_str(&format!("    fn write(&self, {param}: &mut Element) {{\n"));
        output.push_str(&write);
        output.push_str("    }\n");
        output.push_str("}\n\n");
        output
    }

    /// Generates the `XmlRoot` impl and the file alias for the root node.
    fn generate_root_impl(&self, node: &ResolvedNode) -> String {
        let mut output = String::new();

        output.push_str(&format!("impl XmlRoot for {} {{\n", node.struct_name));
        output.push_str("    fn root_tag(&self) -> &str {\n");
        output.push_str(&format!("        {:?}\n", node.name));
        output.push_str("    }\n\n");
        output.push_str("    fn fresh(&self) -> Self {\n");
        output.push_str("        Self::default()\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("/// `{}` document bound to a file.\n", node.name));
        output.push_str(&format!(
            "pub type {}File = BoundFile<{}>;\n\n",
            node.struct_name, node.struct_name
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmlbind_schema::{AttributeDef, ChildDef, NodeDef, Schema};

    fn ir() -> SchemaIr {
        let schema = Schema::new("Example")
            .with_node(
                NodeDef::new("Example")
                    .child(ChildDef::single("node1"))
                    .child(ChildDef::many("node2")),
            )
            .with_node(NodeDef::new("node1").attribute(AttributeDef::new("att1", ScalarKind::Int)))
            .with_node(
                NodeDef::new("node2")
                    .attribute(AttributeDef::optional("att1", ScalarKind::Text))
                    .attribute(AttributeDef::new("type", ScalarKind::Float))
                    .text(ScalarKind::Text),
            )
            .with_node(NodeDef::new("empty"));
        SchemaIr::from_schema(&schema)
    }

    #[test]
    fn test_generate_structs() {
        let code = NodeGenerator::new(&ir()).generate();

        assert!(code.contains(
            "pub struct Node1 {\n    /// `att1` attribute.\n    pub att1: i32,\n}"
        ));
        assert!(code.contains("pub struct Example {"));
        assert!(code.contains("    pub node1: Node1,\n"));
        assert!(code.contains("    pub node2: Vec<Node2>,\n"));
        assert!(code.contains("    pub r#type: f32,\n"));
        assert!(code.contains("    pub text: String,\n"));
    }

    #[test]
    fn test_generate_node_impls() {
        let code = NodeGenerator::new(&ir()).generate();

        assert!(code.contains("impl XmlNode for Node2 {"));
        assert!(code.contains("self.att1 = read_attribute(element, \"att1\");"));
        assert!(code.contains("write_optional_attribute(element, \"att1\", &self.att1);"));
        assert!(code.contains("write_attribute(element, \"type\", &self.r#type);"));
        assert!(code.contains("self.text = read_text(element);"));
        assert!(code.contains("self.node1 = read_child(element, \"node1\");"));
        assert!(code.contains("write_children(element, \"node2\", &self.node2);"));
        assert!(code.contains("fn read(&mut self, _element: &Element) {\n    }"));
    }

    #[test]
    fn test_generate_root_impl_only_for_root() {
        let code = NodeGenerator::new(&ir()).generate();

        assert_eq!(code.matches("impl XmlRoot for").count(), 1);
        assert!(code.contains("impl XmlRoot for Example {"));
        assert!(code.contains("        \"Example\"\n"));
        assert!(code.contains("pub type ExampleFile = BoundFile<Example>;"));
    }

    #[test]
    fn test_children_generated_before_parents() {
        let code = NodeGenerator::new(&ir()).generate();
        let node1 = code.find("pub struct Node1").unwrap();
        let node2 = code.find("pub struct Node2").unwrap();
        let root = code.find("pub struct Example").unwrap();
        assert!(node1 < root && node2 < root);
    }
}
