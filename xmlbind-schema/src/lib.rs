//! # XmlBind Schema
//!
//! Schema descriptors and the generic tree engine.
//!
//! This crate provides:
//! - Descriptor types for node types, attributes, text and children
//! - Schema inference from prototype documents
//! - Schema validation
//! - Intermediate representation for code generation
//! - A descriptor-driven tree usable with any schema at runtime

pub mod error;
pub mod ir;
pub mod parser;
pub mod tree;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError, TreeError};
pub use ir::SchemaIr;
pub use parser::{parse_prototype, parse_prototype_file};
pub use tree::{Children, DynamicDocument, DynamicFile, DynamicNode, Value};
pub use types::{AttributeDef, ChildDef, NodeDef, Occurs, Presence, ScalarKind, Schema};
pub use validation::validate_schema;
