// Generated by xmlbind-codegen from schema 'Example'. Do not edit.

use xmlbind_core::{BoundFile, Element, XmlNode, XmlRoot, read_attribute, read_child, read_children, read_text, write_attribute, write_child, write_children, write_optional_attribute, write_text};

/// `node1` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node1 {
    /// `att1` attribute.
    pub att1: i32,
    /// `att2` attribute.
    pub att2: f32,
    /// `att3` attribute.
    pub att3: String,
}

impl XmlNode for Node1 {
    fn read(&mut self, element: &Element) {
        self.att1 = read_attribute(element, "att1");
        self.att2 = read_attribute(element, "att2");
        self.att3 = read_attribute(element, "att3");
    }

    fn write(&self, element: &mut Element) {
        write_attribute(element, "att1", &self.att1);
        write_attribute(element, "att2", &self.att2);
        write_attribute(element, "att3", &self.att3);
    }
}

/// `node3` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node3 {
    /// `att1` attribute.
    pub att1: String,
    /// `att2` attribute, omitted when empty.
    pub att2: String,
    /// Text content.
    pub text: String,
}

impl XmlNode for Node3 {
    fn read(&mut self, element: &Element) {
        self.att1 = read_attribute(element, "att1");
        self.att2 = read_attribute(element, "att2");
        self.text = read_text(element);
    }

    fn write(&self, element: &mut Element) {
        write_attribute(element, "att1", &self.att1);
        write_optional_attribute(element, "att2", &self.att2);
        write_text(element, &self.text);
    }
}

/// `node2` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node2 {
    /// `att1` attribute.
    pub att1: String,
    /// `node3` children, in order.
    pub node3: Vec<Node3>,
}

impl XmlNode for Node2 {
    fn read(&mut self, element: &Element) {
        self.att1 = read_attribute(element, "att1");
        self.node3 = read_children(element, "node3");
    }

    fn write(&self, element: &mut Element) {
        write_attribute(element, "att1", &self.att1);
        write_children(element, "node3", &self.node3);
    }
}

/// `node5` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node5 {
    /// Text content.
    pub text: i32,
}

impl XmlNode for Node5 {
    fn read(&mut self, element: &Element) {
        self.text = read_text(element);
    }

    fn write(&self, element: &mut Element) {
        write_text(element, &self.text);
    }
}

/// `node4` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node4 {
    /// `att1` attribute, omitted when empty.
    pub att1: String,
    /// `node5` children, in order.
    pub node5: Vec<Node5>,
}

impl XmlNode for Node4 {
    fn read(&mut self, element: &Element) {
        self.att1 = read_attribute(element, "att1");
        self.node5 = read_children(element, "node5");
    }

    fn write(&self, element: &mut Element) {
        write_optional_attribute(element, "att1", &self.att1);
        write_children(element, "node5", &self.node5);
    }
}

/// `node7` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node7 {
    /// Text content.
    pub text: f32,
}

impl XmlNode for Node7 {
    fn read(&mut self, element: &Element) {
        self.text = read_text(element);
    }

    fn write(&self, element: &mut Element) {
        write_text(element, &self.text);
    }
}

/// `node6` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node6 {
    /// `att1` attribute.
    pub att1: String,
    /// `node7` children, in order.
    pub node7: Vec<Node7>,
}

impl XmlNode for Node6 {
    fn read(&mut self, element: &Element) {
        self.att1 = read_attribute(element, "att1");
        self.node7 = read_children(element, "node7");
    }

    fn write(&self, element: &mut Element) {
        write_attribute(element, "att1", &self.att1);
        write_children(element, "node7", &self.node7);
    }
}

/// `Example` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Example {
    /// `node1` child.
    pub node1: Node1,
    /// `node2` children, in order.
    pub node2: Vec<Node2>,
    /// `node4` children, in order.
    pub node4: Vec<Node4>,
    /// `node6` children, in order.
    pub node6: Vec<Node6>,
}

impl XmlNode for Example {
    fn read(&mut self, element: &Element) {
        self.node1 = read_child(element, "node1");
        self.node2 = read_children(element, "node2");
        self.node4 = read_children(element, "node4");
        self.node6 = read_children(element, "node6");
    }

    fn write(&self, element: &mut Element) {
        write_child(element, "node1", &self.node1);
        write_children(element, "node2", &self.node2);
        write_children(element, "node4", &self.node4);
        write_children(element, "node6", &self.node6);
    }
}

impl XmlRoot for Example {
    fn root_tag(&self) -> &str {
        "Example"
    }

    fn fresh(&self) -> Self {
        Self::default()
    }
}

/// `Example` document bound to a file.
pub type ExampleFile = BoundFile<Example>;
