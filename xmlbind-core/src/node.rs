//! Node binding traits and the helpers bindings are built from.
//!
//! A binding is a plain Rust value that knows how to populate itself from an
//! [`Element`] and how to serialize itself into one. Containers hold their
//! children by value, so `Clone` is a deep copy and dropping a tree releases
//! every node exactly once.
//!
//! # Example
//! ```ignore
//! impl XmlNode for Node2 {
//!     fn read(&mut self, element: &Element) {
//!         self.att1 = read_attribute(element, "att1");
//!         self.node3 = read_children(element, "node3");
//!     }
//!
//!     fn write(&self, element: &mut Element) {
//!         write_attribute(element, "att1", &self.att1);
//!         write_children(element, "node3", &self.node3);
//!     }
//! }
//! ```

use crate::element::Element;
use crate::value::XmlScalar;

/// Trait for values bound to one XML element.
pub trait XmlNode {
    /// Populates the value from an element.
    ///
    /// Missing attributes, text or children resolve to defaults; reading
    /// never fails. Collections are replaced, not appended to.
    fn read(&mut self, element: &Element);

    /// Writes the value's attributes, text and children into an element.
    fn write(&self, element: &mut Element);
}

/// Trait for the top-level binding of a document.
pub trait XmlRoot: XmlNode + Sized {
    /// Tag of the document's root element.
    fn root_tag(&self) -> &str;

    /// Returns a new, empty tree of the same shape, ready to be read into.
    #[must_use]
    fn fresh(&self) -> Self;
}

/// Reads a scalar attribute, defaulting when absent or unparsable.
#[must_use]
pub fn read_attribute<T: XmlScalar>(element: &Element, name: &str) -> T {
    match element.attribute(name) {
        Some(raw) => T::parse_xml(raw).unwrap_or_else(|| {
            tracing::debug!(
                element = element.name(),
                attribute = name,
                value = raw,
                "unparsable attribute value, using default"
            );
            T::default()
        }),
        None => T::default(),
    }
}

/// Writes a scalar attribute unconditionally.
pub fn write_attribute<T: XmlScalar>(element: &mut Element, name: &str, value: &T) {
    element.set_attribute(name, value.to_xml());
}

/// Writes a string attribute only when it is non-empty.
pub fn write_optional_attribute(element: &mut Element, name: &str, value: &str) {
    if !value.is_empty() {
        element.set_attribute(name, value);
    }
}

/// Reads the element's text as a scalar, defaulting when empty or unparsable.
#[must_use]
pub fn read_text<T: XmlScalar>(element: &Element) -> T {
    let raw = element.text();
    if raw.is_empty() {
        return T::default();
    }
    T::parse_xml(raw).unwrap_or_else(|| {
        tracing::debug!(
            element = element.name(),
            value = raw,
            "unparsable text value, using default"
        );
        T::default()
    })
}

/// Writes a scalar as the element's text.
pub fn write_text<T: XmlScalar>(element: &mut Element, value: &T) {
    element.set_text(value.to_xml());
}

/// Reads a singleton child from the first element with `tag`.
///
/// An absent element yields the default value.
#[must_use]
pub fn read_child<T: XmlNode + Default>(element: &Element, tag: &str) -> T {
    let mut value = T::default();
    if let Some(child) = element.child(tag) {
        value.read(child);
    }
    value
}

/// Reads one owned value per child element with `tag`, in document order.
#[must_use]
pub fn read_children<T: XmlNode + Default>(element: &Element, tag: &str) -> Vec<T> {
    element
        .children_named(tag)
        .map(|child| {
            let mut value = T::default();
            value.read(child);
            value
        })
        .collect()
}

/// Appends a child element with `tag` and writes the value into it.
pub fn write_child<T: XmlNode>(element: &mut Element, tag: &str, value: &T) {
    value.write(element.append_child(tag));
}

/// Appends one child element with `tag` per value, in order.
pub fn write_children<T: XmlNode>(element: &mut Element, tag: &str, values: &[T]) {
    for value in values {
        write_child(element, tag, value);
    }
}
