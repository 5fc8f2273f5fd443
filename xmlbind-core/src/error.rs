//! Error types for XmlBind core operations.

use thiserror::Error;

/// Error type for document parsing, serialization and file binding.
#[derive(Debug, Error)]
pub enum BindError {
    /// Malformed XML reported by the reader or writer.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute in a start tag.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Unknown or malformed entity or character reference.
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document contains no element at all.
    #[error("document has no root element")]
    NoRoot,

    /// The document contains more than one top-level element.
    #[error("document has more than one root element: '{first}' and '{second}'")]
    MultipleRoots {
        /// Name of the first root element.
        first: String,
        /// Name of the extra top-level element.
        second: String,
    },

    /// The document ended while an element was still open.
    #[error("unexpected end of document inside element '{element}'")]
    UnexpectedEof {
        /// Name of the innermost open element.
        element: String,
    },

    /// The document root does not carry the tag the binding expects.
    #[error("root element mismatch: expected '{expected}', found '{found}'")]
    RootMismatch {
        /// Tag the binding expects.
        expected: String,
        /// Tag found in the document.
        found: String,
    },
}

impl BindError {
    /// Creates a root mismatch error.
    pub fn root_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::RootMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Result type alias for XmlBind core operations.
pub type Result<T> = std::result::Result<T, BindError>;
