//! Generic, descriptor-driven tree engine.
//!
//! A [`DynamicNode`] holds the values of one node type as described by a
//! [`Schema`]: typed attribute values in definition order, an optional text
//! value, and one slot per child that is either an owned singleton or an
//! ordered collection. [`DynamicDocument`] pairs a root node with its schema
//! and plugs into [`BoundFile`](xmlbind_core::BoundFile) like any generated
//! binding.

use crate::error::{SchemaError, TreeError};
use crate::types::{Occurs, ScalarKind, Schema};
use crate::validation::validate_schema;
use std::fmt;
use std::sync::Arc;
use xmlbind_core::{BoundFile, Element, XmlNode, XmlRoot, XmlScalar};

/// A typed scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Value {
    /// Returns the zero value of a kind.
    #[must_use]
    pub fn default_for(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Int => Self::Int(0),
            ScalarKind::Float => Self::Float(0.0),
            ScalarKind::Text => Self::Text(String::new()),
        }
    }

    /// Parses raw XML text as a value of `kind`, defaulting when unparsable.
    #[must_use]
    pub fn parse(kind: ScalarKind, raw: &str) -> Self {
        match kind {
            ScalarKind::Int => Self::Int(i64::parse_xml(raw).unwrap_or_default()),
            ScalarKind::Float => Self::Float(f64::parse_xml(raw).unwrap_or_default()),
            ScalarKind::Text => Self::Text(raw.to_string()),
        }
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Text(_) => ScalarKind::Text,
        }
    }

    /// Formats the value as XML text.
    #[must_use]
    pub fn to_xml(&self) -> String {
        match self {
            Self::Int(v) => v.to_xml(),
            Self::Float(v) => v.to_xml(),
            Self::Text(v) => v.clone(),
        }
    }

    /// Returns true for empty text. Numbers are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float, if this is one.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Contents of one child slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    /// Exactly one owned child.
    Single(Box<DynamicNode>),
    /// Ordered, owned children.
    Many(Vec<DynamicNode>),
}

#[derive(Debug, Clone, PartialEq)]
struct ChildSlot {
    tag: String,
    node_type: String,
    content: Children,
}

/// One node of a descriptor-driven tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicNode {
    node_type: String,
    attributes: Vec<(String, Value)>,
    text: Option<Value>,
    children: Vec<ChildSlot>,
}

impl DynamicNode {
    /// Creates a node of `node_type` holding default values: zero numbers,
    /// empty text, default singletons and empty collections.
    ///
    /// An unknown node type yields a node with no members.
    #[must_use]
    pub fn empty(schema: &Schema, node_type: &str) -> Self {
        let mut path = Vec::new();
        Self::empty_guarded(schema, node_type, &mut path)
    }

    fn empty_guarded<'a>(schema: &'a Schema, node_type: &'a str, path: &mut Vec<&'a str>) -> Self {
        let mut node = Self {
            node_type: node_type.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        };
        let Some(def) = schema.get_node(node_type) else {
            tracing::warn!("Unknown node type '{}'", node_type);
            return node;
        };
        // A singleton cycle only survives an unvalidated schema; stop there.
        if path.contains(&node_type) {
            return node;
        }
        path.push(node_type);

        node.attributes = def
            .attributes
            .iter()
            .map(|a| (a.name.clone(), Value::default_for(a.kind)))
            .collect();
        node.text = def.text.map(Value::default_for);
        node.children = def
            .children
            .iter()
            .map(|c| ChildSlot {
                tag: c.tag.clone(),
                node_type: c.node_type.clone(),
                content: match c.occurs {
                    Occurs::Single => {
                        Children::Single(Box::new(Self::empty_guarded(schema, &c.node_type, path)))
                    }
                    Occurs::Many => Children::Many(Vec::new()),
                },
            })
            .collect();

        path.pop();
        node
    }

    /// Returns the node type name.
    #[must_use]
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Populates the node from an element, replacing all current values.
    ///
    /// Absent attributes, text or singleton children resolve to defaults;
    /// collections hold one node per matching child element, in order.
    pub fn read(&mut self, schema: &Schema, element: &Element) {
        let Some(def) = schema.get_node(&self.node_type) else {
            return;
        };

        self.attributes = def
            .attributes
            .iter()
            .map(|a| {
                let value = match element.attribute(&a.name) {
                    Some(raw) => Value::parse(a.kind, raw),
                    None => Value::default_for(a.kind),
                };
                (a.name.clone(), value)
            })
            .collect();

        self.text = def.text.map(|kind| Value::parse(kind, element.text()));

        self.children = def
            .children
            .iter()
            .map(|c| {
                let content = match c.occurs {
                    Occurs::Single => {
                        let mut child = Self::empty(schema, &c.node_type);
                        if let Some(el) = element.child(&c.tag) {
                            child.read(schema, el);
                        }
                        Children::Single(Box::new(child))
                    }
                    Occurs::Many => Children::Many(
                        element
                            .children_named(&c.tag)
                            .map(|el| {
                                let mut child = Self::empty(schema, &c.node_type);
                                child.read(schema, el);
                                child
                            })
                            .collect(),
                    ),
                };
                ChildSlot {
                    tag: c.tag.clone(),
                    node_type: c.node_type.clone(),
                    content,
                }
            })
            .collect();
    }

    /// Writes attributes, text and children into an element.
    ///
    /// Optional attributes holding empty text are omitted.
    pub fn write(&self, schema: &Schema, element: &mut Element) {
        let def = schema.get_node(&self.node_type);

        for (name, value) in &self.attributes {
            let optional = def
                .and_then(|d| d.get_attribute(name))
                .is_some_and(|a| a.is_optional());
            if optional && value.is_empty() {
                continue;
            }
            element.set_attribute(name.as_str(), value.to_xml());
        }

        if let Some(text) = &self.text {
            element.set_text(text.to_xml());
        }

        for slot in &self.children {
            match &slot.content {
                Children::Single(child) => child.write(schema, element.append_child(&slot.tag)),
                Children::Many(nodes) => {
                    for child in nodes {
                        child.write(schema, element.append_child(&slot.tag));
                    }
                }
            }
        }
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Sets an attribute value.
    ///
    /// # Errors
    /// Returns `TreeError` if the attribute is not declared or the value has
    /// the wrong kind.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) -> Result<(), TreeError> {
        let value = value.into();
        let Some((_, slot)) = self.attributes.iter_mut().find(|(n, _)| n == name) else {
            return Err(TreeError::UnknownAttribute {
                node: self.node_type.clone(),
                name: name.to_string(),
            });
        };
        check_kind(name, slot, &value)?;
        *slot = value;
        Ok(())
    }

    /// Returns the text value.
    #[must_use]
    pub fn text(&self) -> Option<&Value> {
        self.text.as_ref()
    }

    /// Sets the text value.
    ///
    /// # Errors
    /// Returns `TreeError` if the node has no text or the value has the
    /// wrong kind.
    pub fn set_text(&mut self, value: impl Into<Value>) -> Result<(), TreeError> {
        let value = value.into();
        let Some(slot) = self.text.as_mut() else {
            return Err(TreeError::NoText {
                node: self.node_type.clone(),
            });
        };
        check_kind("text", slot, &value)?;
        *slot = value;
        Ok(())
    }

    /// Returns a singleton child.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&DynamicNode> {
        match &self.slot(tag)?.content {
            Children::Single(node) => Some(&**node),
            Children::Many(_) => None,
        }
    }

    /// Returns a singleton child for mutation.
    pub fn child_mut(&mut self, tag: &str) -> Option<&mut DynamicNode> {
        match &mut self.children.iter_mut().find(|s| s.tag == tag)?.content {
            Children::Single(node) => Some(&mut **node),
            Children::Many(_) => None,
        }
    }

    /// Returns the members of a collection, or an empty slice when `tag` is
    /// not a collection.
    #[must_use]
    pub fn children(&self, tag: &str) -> &[DynamicNode] {
        match self.slot(tag).map(|s| &s.content) {
            Some(Children::Many(nodes)) => nodes.as_slice(),
            _ => &[],
        }
    }

    /// Returns a collection for mutation.
    pub fn children_mut(&mut self, tag: &str) -> Option<&mut Vec<DynamicNode>> {
        match &mut self.children.iter_mut().find(|s| s.tag == tag)?.content {
            Children::Many(nodes) => Some(nodes),
            Children::Single(_) => None,
        }
    }

    /// Appends a node to a collection.
    ///
    /// # Errors
    /// Returns `TreeError` if `tag` is not a collection of `node`'s type.
    pub fn push_child(&mut self, tag: &str, node: DynamicNode) -> Result<(), TreeError> {
        let Some(slot) = self.children.iter_mut().find(|s| s.tag == tag) else {
            return Err(TreeError::UnknownChild {
                node: self.node_type.clone(),
                tag: tag.to_string(),
            });
        };
        if slot.node_type != node.node_type {
            return Err(TreeError::NodeTypeMismatch {
                tag: tag.to_string(),
                expected: slot.node_type.clone(),
                found: node.node_type,
            });
        }
        match &mut slot.content {
            Children::Many(nodes) => {
                nodes.push(node);
                Ok(())
            }
            Children::Single(_) => Err(TreeError::NotACollection {
                tag: tag.to_string(),
            }),
        }
    }

    fn slot(&self, tag: &str) -> Option<&ChildSlot> {
        self.children.iter().find(|s| s.tag == tag)
    }
}

fn check_kind(name: &str, current: &Value, value: &Value) -> Result<(), TreeError> {
    if current.kind() == value.kind() {
        Ok(())
    } else {
        Err(TreeError::KindMismatch {
            name: name.to_string(),
            expected: current.kind().hint().to_string(),
            found: value.kind().hint().to_string(),
        })
    }
}

/// A whole document bound through a shared schema.
#[derive(Debug, Clone)]
pub struct DynamicDocument {
    schema: Arc<Schema>,
    root: DynamicNode,
}

impl DynamicDocument {
    /// Creates an empty document for a schema.
    ///
    /// # Errors
    /// Returns `SchemaError` if the schema fails validation.
    pub fn new(schema: Arc<Schema>) -> Result<Self, SchemaError> {
        validate_schema(&schema)?;
        let root = DynamicNode::empty(&schema, &schema.root);
        Ok(Self { schema, root })
    }

    /// Returns the schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &DynamicNode {
        &self.root
    }

    /// Returns the root node for mutation.
    pub fn root_mut(&mut self) -> &mut DynamicNode {
        &mut self.root
    }

    /// Creates an empty node of a type from this document's schema.
    #[must_use]
    pub fn new_node(&self, node_type: &str) -> DynamicNode {
        DynamicNode::empty(&self.schema, node_type)
    }
}

impl PartialEq for DynamicDocument {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl XmlNode for DynamicDocument {
    fn read(&mut self, element: &Element) {
        self.root.read(&self.schema, element);
    }

    fn write(&self, element: &mut Element) {
        self.root.write(&self.schema, element);
    }
}

impl XmlRoot for DynamicDocument {
    fn root_tag(&self) -> &str {
        &self.schema.root
    }

    fn fresh(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            root: DynamicNode::empty(&self.schema, &self.schema.root),
        }
    }
}

/// File adapter for descriptor-driven documents.
pub type DynamicFile = BoundFile<DynamicDocument>;
