//! # XmlBind
//!
//! Schema-driven XML data binding for Rust.
//!
//! XmlBind maps an XML document onto an owned tree of Rust values and back.
//! A tree is either a set of typed structs implementing [`XmlNode`], written
//! by hand or generated from a schema, or a [`DynamicDocument`] driven by a
//! schema descriptor at runtime.
//!
//! ## Features
//!
//! - **Typed bindings** - Plain structs with zero defaults for missing data
//! - **Generic engine** - One descriptor-driven tree for any schema
//! - **Schema by example** - Infer a schema from a prototype document
//! - **Code generation** - Rust bindings and XSD from a schema
//! - **File adapter** - Load and save whole documents; a failed load never
//!   disturbs the tree already held
//!
//! ## Quick Start
//!
//! ```ignore
//! use xmlbind::prelude::*;
//!
//! let mut file = ExampleFile::default();
//! file.load("example.xml")?;
//! file.root_mut().node2.push(Node2 {
//!     att1: "cat".to_string(),
//!     ..Default::default()
//! });
//! file.save("example.xml")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Element model, document codec, node traits, file adapter
//! - [`schema`] - Descriptors, prototype inference, validation, generic engine
//! - [`codegen`] - Rust binding and XSD generation
//! - [`example`] - Typed `Example` bindings
//! - [`example_text`] - Text-only `Example` schema on the generic engine

pub mod example;
pub mod example_text;
pub mod prelude;

/// Element model, document codec and binding traits.
pub mod core {
    pub use xmlbind_core::*;
}

/// Schema descriptors, inference, validation and the generic engine.
pub mod schema {
    pub use xmlbind_schema::*;
}

/// Code generation from schemas.
pub mod codegen {
    pub use xmlbind_codegen::*;
}

// Re-export commonly used items at the crate root
pub use xmlbind_core::{BindError, BoundFile, BoundFileBuilder, Element, XmlNode, XmlRoot};
pub use xmlbind_schema::{DynamicDocument, DynamicNode, Schema, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use xmlbind_codegen::{XsdGenerator, generate_from_prototype};
    use xmlbind_schema::{Occurs, ScalarKind, parse_prototype};

    #[test]
    fn test_typed_prototype_generates_matching_bindings() {
        let code = generate_from_prototype(example::PROTOTYPE).unwrap();

        for name in ["Node1", "Node2", "Node3", "Node4", "Node5", "Node6", "Node7", "Example"] {
            assert!(
                code.contains(&format!("pub struct {name} {{")),
                "missing {name}"
            );
        }
        assert!(code.contains("    pub att2: f32,\n"));
        assert!(code.contains("    pub text: i32,\n"));
        assert!(code.contains("    pub node2: Vec<Node2>,\n"));
        assert!(code.contains("write_optional_attribute(element, \"att1\", &self.att1);"));
        assert!(code.contains("pub type ExampleFile = BoundFile<Example>;"));
    }

    #[test]
    fn test_typed_prototype_schema() {
        let schema = parse_prototype(example::PROTOTYPE).unwrap();
        assert_eq!(schema.root, example::ROOT_TAG);

        let node4 = schema.get_node("node4").unwrap();
        assert!(node4.get_attribute("att1").unwrap().is_optional());
        assert_eq!(node4.get_child("node5").unwrap().occurs, Occurs::Many);
        assert_eq!(
            schema.get_node("node7").unwrap().text,
            Some(ScalarKind::Float)
        );
    }

    #[test]
    fn test_typed_prototype_xsd() {
        let schema = parse_prototype(example::PROTOTYPE).unwrap();
        let xsd = XsdGenerator::new(&schema).generate().unwrap();

        assert!(xsd.contains("<xs:complexType name=\"tn_node7\">"));
        assert!(xsd.contains("<xs:extension base=\"xs:float\"/>"));
        assert!(xsd.contains(
            "<xs:element name=\"node1\" type=\"tn_node1\" minOccurs=\"1\" maxOccurs=\"1\"/>"
        ));
        assert!(xsd.contains(
            "<xs:element name=\"node6\" type=\"tn_node6\" minOccurs=\"0\" maxOccurs=\"unbounded\"/>"
        ));
    }

    #[test]
    fn test_variants_agree_on_shape() {
        let typed = r#"<Example><node1 att1="5" att2="1.5" att3="x"/><node2 att1="cat"><node3 att1="a" att2="b">hi</node3></node2></Example>"#;

        let mut typed_file = example::ExampleFile::default();
        typed_file.load_str(typed).unwrap();
        let mut text_file = example_text::new_file().unwrap();
        text_file.load_str(typed).unwrap();

        assert_eq!(typed_file.to_element(), text_file.to_element());
    }
}
