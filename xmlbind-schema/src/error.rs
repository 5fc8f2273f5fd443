//! Error types for schema parsing, validation and dynamic trees.

use thiserror::Error;
use xmlbind_core::BindError;

/// Error type for prototype parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The prototype is not a well-formed XML document.
    #[error("document error: {0}")]
    Document(#[from] BindError),

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Node type not found.
    #[error("node type '{name}' not found")]
    TypeNotFound {
        /// Node type name.
        name: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (node, attribute, child).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// A cycle of singleton children, which has no finite value.
    #[error("circular singleton reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },

    /// Two members of a node map to the same generated field name.
    #[error("field name '{field}' is generated twice in node '{node}'")]
    FieldCollision {
        /// Node type name.
        node: String,
        /// Colliding field name.
        field: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// Error type for edits to a dynamic tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node type declares no such attribute.
    #[error("node '{node}' has no attribute '{name}'")]
    UnknownAttribute {
        /// Node type name.
        node: String,
        /// Attribute name.
        name: String,
    },

    /// The node type declares no text value.
    #[error("node '{node}' has no text value")]
    NoText {
        /// Node type name.
        node: String,
    },

    /// The node type declares no such child.
    #[error("node '{node}' has no child '{tag}'")]
    UnknownChild {
        /// Node type name.
        node: String,
        /// Child tag.
        tag: String,
    },

    /// A value of the wrong scalar kind.
    #[error("'{name}' expects a {expected} value, got {found}")]
    KindMismatch {
        /// Attribute name, or `text`.
        name: String,
        /// Declared kind.
        expected: String,
        /// Kind supplied.
        found: String,
    },

    /// A node of the wrong type pushed into a collection.
    #[error("collection '{tag}' holds '{expected}' nodes, got '{found}'")]
    NodeTypeMismatch {
        /// Child tag.
        tag: String,
        /// Declared node type.
        expected: String,
        /// Node type supplied.
        found: String,
    },

    /// Collection access on a singleton child.
    #[error("child '{tag}' is a singleton, not a collection")]
    NotACollection {
        /// Child tag.
        tag: String,
    },
}
