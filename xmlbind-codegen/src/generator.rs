//! Top-level Rust binding generator.

use crate::rust::NodeGenerator;
use xmlbind_schema::ir::{ResolvedAttribute, SchemaIr};
use xmlbind_schema::{Occurs, ScalarKind};

/// Default path the generated code imports binding support from.
pub const DEFAULT_CORE_PATH: &str = "xmlbind_core";

/// Generates a Rust module of typed bindings for a schema.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    core_path: String,
}

impl<'a> Generator<'a> {
    /// Creates a new generator importing from `xmlbind_core`.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self {
            ir,
            core_path: DEFAULT_CORE_PATH.to_string(),
        }
    }

    /// Sets the path binding support is imported from, e.g. `xmlbind::core`.
    #[must_use]
    pub fn with_core_path(mut self, path: impl Into<String>) -> Self {
        self.core_path = path.into();
        self
    }

    /// Generates the complete module source.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "// Generated by xmlbind-codegen from schema '{}'. Do not edit.\n\n",
            self.ir.root
        ));
        output.push_str(&self.generate_imports());
        output.push_str(&NodeGenerator::new(self.ir).generate());

        // Single trailing newline.
        while output.ends_with("\n\n") {
            output.pop();
        }
        output
    }

    fn generate_imports(&self) -> String {
        let nodes = &self.ir.nodes;
        let has_root = nodes.iter().any(|n| n.is_root);
        let has_text = nodes.iter().any(|n| n.text.is_some());
        let suppressible = |a: &ResolvedAttribute| a.is_optional && a.kind == ScalarKind::Text;

        let mut names: Vec<&str> = Vec::new();
        if has_root {
            names.push("BoundFile");
        }
        names.push("Element");
        names.push("XmlNode");
        if has_root {
            names.push("XmlRoot");
        }
        if self.any_attribute(|_| true) {
            names.push("read_attribute");
        }
        if self.any_child(Occurs::Single) {
            names.push("read_child");
        }
        if self.any_child(Occurs::Many) {
            names.push("read_children");
        }
        if has_text {
            names.push("read_text");
        }
        if self.any_attribute(|a| !suppressible(a)) {
            names.push("write_attribute");
        }
        if self.any_child(Occurs::Single) {
            names.push("write_child");
        }
        if self.any_child(Occurs::Many) {
            names.push("write_children");
        }
        if self.any_attribute(suppressible) {
            names.push("write_optional_attribute");
        }
        if has_text {
            names.push("write_text");
        }

        format!("use {}::{{{}}};\n\n", self.core_path, names.join(", "))
    }

    fn any_attribute(&self, pred: impl Fn(&ResolvedAttribute) -> bool) -> bool {
        self.ir.nodes.iter().flat_map(|n| &n.attributes).any(pred)
    }

    fn any_child(&self, occurs: Occurs) -> bool {
        self.ir
            .nodes
            .iter()
            .flat_map(|n| &n.children)
            .any(|c| c.occurs == occurs)
    }
}
