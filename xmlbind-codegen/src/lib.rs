//! # XmlBind Codegen
//!
//! Code generation from XmlBind schemas.
//!
//! This crate provides:
//! - Rust struct and `XmlNode` impl generation
//! - XSD generation
//! - Entry points taking a schema, a prototype document or a prototype file

pub mod error;
pub mod generator;
pub mod rust;
pub mod xsd;

pub use error::CodegenError;
pub use generator::Generator;
pub use xsd::XsdGenerator;

use std::path::Path;
use xmlbind_schema::{Schema, SchemaIr, parse_prototype, validate_schema};

/// Generates Rust bindings for a schema.
///
/// # Errors
/// Returns `CodegenError` if the schema fails validation.
pub fn generate_from_schema(schema: &Schema) -> Result<String, CodegenError> {
    validate_schema(schema)?;
    let ir = SchemaIr::from_schema(schema);
    let generator = Generator::new(&ir);
    let code = generator.generate();
    tracing::debug!(
        "Generated bindings for '{}' ({} structs)",
        schema.root,
        ir.nodes.len()
    );
    Ok(code)
}

/// Generates Rust bindings from a prototype document.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_prototype(xml: &str) -> Result<String, CodegenError> {
    let schema = parse_prototype(xml)?;
    generate_from_schema(&schema)
}

/// Generates Rust bindings from a prototype file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_prototype(&xml)
}

/// Generates an XSD from a prototype document.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or serialization fails.
pub fn generate_xsd_from_prototype(xml: &str) -> Result<String, CodegenError> {
    let schema = parse_prototype(xml)?;
    validate_schema(&schema)?;
    XsdGenerator::new(&schema).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTOTYPE: &str = r#"<Example>
    <node1 nodeCount="1" att1="int" att2="float" att3="string"/>
    <node2 att1="string">
        <node3 att1="string" att2="string?">string</node3>
    </node2>
</Example>"#;

    #[test]
    fn test_generate_from_prototype() {
        let code = generate_from_prototype(PROTOTYPE).unwrap();
        assert!(code.contains("pub struct Node1 {"));
        assert!(code.contains("    pub att2: f32,\n"));
        assert!(code.contains("pub struct Node3 {"));
        assert!(code.contains("write_optional_attribute(element, \"att2\", &self.att2);"));
        assert!(code.contains("pub type ExampleFile = BoundFile<Example>;"));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.xml");
        std::fs::write(&path, PROTOTYPE).unwrap();
        let code = generate_from_file(&path).unwrap();
        assert!(code.contains("impl XmlRoot for Example {"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(Path::new("/nonexistent/prototype.xml"));
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }

    #[test]
    fn test_generate_rejects_invalid_schema() {
        let schema = Schema::new("missing");
        assert!(matches!(generate_from_schema(&schema), Err(CodegenError::Schema(_))));
    }

    #[test]
    fn test_generate_rejects_malformed_prototype() {
        assert!(matches!(
            generate_from_prototype("<Example>"),
            Err(CodegenError::Parse(_))
        ));
    }

    #[test]
    fn test_generate_xsd_from_prototype() {
        let xsd = generate_xsd_from_prototype(PROTOTYPE).unwrap();
        assert!(xsd.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xsd.contains("<xs:complexType name=\"tn_node3\">"));
        assert!(xsd.contains("<xs:element name=\"Example\">"));
        assert!(xsd.contains("<xs:attribute name=\"att2\" type=\"xs:string\" use=\"optional\"/>"));
    }
}
