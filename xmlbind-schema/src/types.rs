//! Schema descriptor types.
//!
//! A [`Schema`] is a flat set of [`NodeDef`]s plus the name of the root node.
//! Each node declares its typed attributes, an optional text value, and its
//! children, each either a singleton or an ordered collection.

use std::collections::HashMap;

/// Complete binding schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Name of the root node, also the document's root tag.
    pub root: String,
    /// Node definitions.
    pub nodes: Vec<NodeDef>,
    /// Node lookup map.
    node_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new schema with no node definitions.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            nodes: Vec::new(),
            node_map: HashMap::new(),
        }
    }

    /// Adds a node definition to the schema.
    pub fn add_node(&mut self, node: NodeDef) {
        let index = self.nodes.len();
        self.node_map.insert(node.name.clone(), index);
        self.nodes.push(node);
    }

    /// Adds a node definition, builder style.
    #[must_use]
    pub fn with_node(mut self, node: NodeDef) -> Self {
        self.add_node(node);
        self
    }

    /// Looks up a node definition by name.
    ///
    /// A map entry left stale by editing `nodes` directly is ignored; call
    /// [`build_node_map`](Self::build_node_map) after such edits.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&NodeDef> {
        let idx = *self.node_map.get(name)?;
        self.nodes.get(idx).filter(|n| n.name == name)
    }

    /// Looks up a node definition by name for mutation.
    pub fn get_node_mut(&mut self, name: &str) -> Option<&mut NodeDef> {
        let idx = *self.node_map.get(name)?;
        self.nodes.get_mut(idx).filter(|n| n.name == name)
    }

    /// Returns true if a node with the given name exists.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.get_node(name).is_some()
    }

    /// Returns the root node definition.
    #[must_use]
    pub fn root_node(&self) -> Option<&NodeDef> {
        self.get_node(&self.root)
    }

    /// Rebuilds the node lookup map from the nodes vector.
    pub fn build_node_map(&mut self) {
        self.node_map.clear();
        for (idx, node) in self.nodes.iter().enumerate() {
            self.node_map.insert(node.name.clone(), idx);
        }
    }
}

/// Type of a scalar attribute or text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarKind {
    /// Signed integer.
    Int,
    /// Floating point number.
    Float,
    /// Free text.
    #[default]
    Text,
}

impl ScalarKind {
    /// Returns the Rust type used in generated bindings.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Float => "f32",
            Self::Text => "String",
        }
    }

    /// Returns the XSD built-in type.
    #[must_use]
    pub const fn xsd_type(&self) -> &'static str {
        match self {
            Self::Int => "xs:int",
            Self::Float => "xs:float",
            Self::Text => "xs:string",
        }
    }

    /// Returns the type hint spelling used in prototypes.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "string",
        }
    }

    /// Parses a type hint, case-insensitively.
    #[must_use]
    pub fn from_hint(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "string" | "str" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Returns the narrowest kind able to hold values of both kinds.
    #[must_use]
    pub const fn widen(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int, Self::Int) => Self::Int,
            (Self::Int | Self::Float, Self::Int | Self::Float) => Self::Float,
            _ => Self::Text,
        }
    }
}

/// Whether an attribute must be present on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    /// Always written, even when empty.
    #[default]
    Required,
    /// Written only when non-empty; absent reads as empty.
    Optional,
}

impl Presence {
    /// Returns the XSD `use` value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

/// Attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDef {
    /// Attribute name.
    pub name: String,
    /// Value type.
    pub kind: ScalarKind,
    /// Presence on write.
    pub presence: Presence,
}

impl AttributeDef {
    /// Creates a required attribute definition.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind,
            presence: Presence::Required,
        }
    }

    /// Creates an optional attribute definition.
    #[must_use]
    pub fn optional(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            presence: Presence::Optional,
            ..Self::new(name, kind)
        }
    }

    /// Returns true if the attribute is omitted when empty.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.presence, Presence::Optional)
    }
}

/// Cardinality of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occurs {
    /// Exactly one owned child, always present.
    #[default]
    Single,
    /// Ordered sequence of zero or more children.
    Many,
}

impl Occurs {
    /// Maps a prototype `nodeCount` to a cardinality.
    #[must_use]
    pub const fn from_node_count(count: u32) -> Self {
        if count == 1 { Self::Single } else { Self::Many }
    }

    /// Returns true for collections.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many)
    }
}

/// Child definition within a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDef {
    /// Element tag of the child.
    pub tag: String,
    /// Node type the child is bound to.
    pub node_type: String,
    /// Cardinality.
    pub occurs: Occurs,
}

impl ChildDef {
    /// Creates a singleton child whose node type is named after its tag.
    #[must_use]
    pub fn single(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            node_type: tag.clone(),
            tag,
            occurs: Occurs::Single,
        }
    }

    /// Creates a collection child whose node type is named after its tag.
    #[must_use]
    pub fn many(tag: impl Into<String>) -> Self {
        Self {
            occurs: Occurs::Many,
            ..Self::single(tag)
        }
    }

    /// Binds the child to a node type with a different name than its tag.
    #[must_use]
    pub fn of_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }
}

/// Node type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDef {
    /// Node type name.
    pub name: String,
    /// Attributes, in write order.
    pub attributes: Vec<AttributeDef>,
    /// Text value type, if the node carries text.
    pub text: Option<ScalarKind>,
    /// Children, in write order.
    pub children: Vec<ChildDef>,
}

impl NodeDef {
    /// Creates a node definition with no members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Adds an attribute, builder style.
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Declares a text value, builder style.
    #[must_use]
    pub fn text(mut self, kind: ScalarKind) -> Self {
        self.text = Some(kind);
        self
    }

    /// Adds a child, builder style.
    #[must_use]
    pub fn child(mut self, child: ChildDef) -> Self {
        self.children.push(child);
        self
    }

    /// Looks up an attribute definition by name.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up a child definition by tag.
    #[must_use]
    pub fn get_child(&self, tag: &str) -> Option<&ChildDef> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new("Example")
            .with_node(NodeDef::new("Example").child(ChildDef::single("node1")))
            .with_node(NodeDef::new("node1").attribute(AttributeDef::new("att1", ScalarKind::Int)));

        assert!(schema.has_node("node1"));
        assert_eq!(schema.root_node().map(|n| n.name.as_str()), Some("Example"));
        let node1 = schema.get_node("node1").unwrap();
        assert_eq!(node1.get_attribute("att1").unwrap().kind, ScalarKind::Int);
        assert!(node1.is_leaf());
    }

    #[test]
    fn test_build_node_map_after_edit() {
        let mut schema = Schema::new("a");
        schema.nodes.push(NodeDef::new("a"));
        assert!(!schema.has_node("a"));
        schema.build_node_map();
        assert!(schema.has_node("a"));
    }

    #[test]
    fn test_lookup_ignores_stale_map() {
        let mut schema = Schema::new("a")
            .with_node(NodeDef::new("a"))
            .with_node(NodeDef::new("b"));
        schema.nodes.truncate(1);
        assert!(schema.get_node("b").is_none());
        assert!(!schema.has_node("b"));

        schema.nodes[0] = NodeDef::new("c");
        assert!(schema.get_node_mut("a").is_none());
        schema.build_node_map();
        assert!(schema.get_node_mut("c").is_some());
    }

    #[test]
    fn test_scalar_kind_hint() {
        assert_eq!(ScalarKind::from_hint("INT"), Some(ScalarKind::Int));
        assert_eq!(ScalarKind::from_hint("double"), Some(ScalarKind::Float));
        assert_eq!(ScalarKind::from_hint("string"), Some(ScalarKind::Text));
        assert_eq!(ScalarKind::from_hint("5"), None);
        assert_eq!(ScalarKind::Float.hint(), "float");
    }

    #[test]
    fn test_scalar_kind_widen() {
        assert_eq!(ScalarKind::Int.widen(ScalarKind::Int), ScalarKind::Int);
        assert_eq!(ScalarKind::Int.widen(ScalarKind::Float), ScalarKind::Float);
        assert_eq!(ScalarKind::Float.widen(ScalarKind::Text), ScalarKind::Text);
    }

    #[test]
    fn test_occurs_from_node_count() {
        assert_eq!(Occurs::from_node_count(1), Occurs::Single);
        assert_eq!(Occurs::from_node_count(0), Occurs::Many);
        assert_eq!(Occurs::from_node_count(5), Occurs::Many);
    }

    #[test]
    fn test_child_def_of_type() {
        let child = ChildDef::many("item").of_type("Entry");
        assert_eq!(child.tag, "item");
        assert_eq!(child.node_type, "Entry");
        assert!(child.occurs.is_many());
    }

    #[test]
    fn test_optional_attribute() {
        let attr = AttributeDef::optional("att2", ScalarKind::Text);
        assert!(attr.is_optional());
        assert_eq!(attr.presence.as_str(), "optional");
        assert_eq!(Presence::default().as_str(), "required");
    }
}
