//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use xmlbind::prelude::*;
//! ```

// Core types
pub use xmlbind_core::{
    BindError, BoundFile, BoundFileBuilder, Element, ReadConfig, WriteConfig, XmlNode, XmlRoot,
    XmlScalar,
};

// Schema types
pub use xmlbind_schema::{
    AttributeDef, ChildDef, DynamicDocument, DynamicFile, DynamicNode, NodeDef, Occurs, ScalarKind,
    Schema, Value, parse_prototype, validate_schema,
};

// Code generation
pub use xmlbind_codegen::{Generator, XsdGenerator, generate_from_prototype};

// Example bindings
pub use crate::example::{Example, ExampleFile, Node1, Node2, Node3, Node4, Node5, Node6, Node7};
