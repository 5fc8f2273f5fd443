//! # XmlBind Core
//!
//! Core types and traits for schema-driven XML data binding.
//!
//! This crate provides:
//! - An in-memory element model ([`Element`])
//! - XML document parsing and serialization on top of `quick-xml`
//! - Scalar value conversion with zero defaults for missing data
//! - The [`XmlNode`] / [`XmlRoot`] read/write traits and collection helpers
//! - The [`BoundFile`] adapter for loading and saving whole trees

pub mod document;
pub mod element;
pub mod error;
pub mod file;
pub mod node;
pub mod value;

pub use document::{
    Indent, ReadConfig, WriteConfig, parse_document, write_document, write_document_string,
};
pub use element::{Attribute, Element};
pub use error::{BindError, Result};
pub use file::{BoundFile, BoundFileBuilder};
pub use node::{
    XmlNode, XmlRoot, read_attribute, read_child, read_children, read_text, write_attribute,
    write_child, write_children, write_optional_attribute, write_text,
};
pub use value::XmlScalar;
