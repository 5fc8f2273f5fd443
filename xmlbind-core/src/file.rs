//! File adapter binding a root node to an XML file on disk.
//!
//! [`BoundFile`] owns one tree. `load` parses a file into a fresh tree and
//! swaps it in only on success, so a failed load never disturbs the tree
//! already held. `save` always writes a new document from scratch.

use crate::document::{
    Indent, ReadConfig, WriteConfig, parse_document, write_document, write_document_string,
};
use crate::element::Element;
use crate::error::{BindError, Result};
use crate::node::XmlRoot;
use std::path::Path;

/// Builder for configuring a [`BoundFile`].
#[derive(Debug, Clone)]
pub struct BoundFileBuilder {
    read_config: ReadConfig,
    write_config: WriteConfig,
    report_errors: bool,
}

impl BoundFileBuilder {
    /// Creates a builder with default settings: tab indentation, verbatim
    /// text, and load failures reported through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            read_config: ReadConfig::default(),
            write_config: WriteConfig::default(),
            report_errors: true,
        }
    }

    /// Sets the indentation used on save.
    #[must_use]
    pub fn indent(mut self, fill: u8, width: usize) -> Self {
        self.write_config.indent = Some(Indent { fill, width });
        self
    }

    /// Saves documents on a single line.
    #[must_use]
    pub fn no_indent(mut self) -> Self {
        self.write_config.indent = None;
        self
    }

    /// Sets whether element text is trimmed on load.
    #[must_use]
    pub fn trim_text(mut self, trim: bool) -> Self {
        self.read_config.trim_text = trim;
        self
    }

    /// Sets whether load and save failures are logged.
    #[must_use]
    pub fn report_errors(mut self, report: bool) -> Self {
        self.report_errors = report;
        self
    }

    /// Builds the file adapter around an initial tree.
    #[must_use]
    pub fn build<T: XmlRoot>(self, root: T) -> BoundFile<T> {
        BoundFile {
            root,
            read_config: self.read_config,
            write_config: self.write_config,
            report_errors: self.report_errors,
        }
    }
}

impl Default for BoundFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An XML file bound to an in-memory tree.
#[derive(Debug, Clone)]
pub struct BoundFile<T> {
    root: T,
    read_config: ReadConfig,
    write_config: WriteConfig,
    report_errors: bool,
}

impl<T: XmlRoot> BoundFile<T> {
    /// Creates a file adapter with default settings around an initial tree.
    #[must_use]
    pub fn new(root: T) -> Self {
        BoundFileBuilder::new().build(root)
    }

    /// Returns the current tree.
    #[must_use]
    pub fn root(&self) -> &T {
        &self.root
    }

    /// Returns the current tree for mutation.
    pub fn root_mut(&mut self) -> &mut T {
        &mut self.root
    }

    /// Consumes the adapter and returns the tree.
    #[must_use]
    pub fn into_root(self) -> T {
        self.root
    }

    /// Loads the file at `path`, replacing the current tree.
    ///
    /// # Errors
    /// Returns `BindError` if the file cannot be read, is not well-formed
    /// XML, or its root element has the wrong tag. The current tree is left
    /// unchanged in every error case.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let decoded = std::fs::read_to_string(path)
            .map_err(BindError::from)
            .and_then(|xml| self.decode(&xml));

        match decoded {
            Ok(root) => {
                self.root = root;
                tracing::debug!("Loaded {}", path.display());
                Ok(())
            }
            Err(e) => {
                if self.report_errors {
                    tracing::error!("Failed to load file '{}': {}", path.display(), e);
                }
                Err(e)
            }
        }
    }

    /// Loads a document from a string, replacing the current tree.
    ///
    /// # Errors
    /// Same conditions as [`BoundFile::load`], minus file access.
    pub fn load_str(&mut self, xml: &str) -> Result<()> {
        let root = self.decode(xml)?;
        self.root = root;
        Ok(())
    }

    /// Saves the current tree to `path`, overwriting any existing file.
    ///
    /// The write is not atomic: a failure part-way may leave a truncated file.
    ///
    /// # Errors
    /// Returns `BindError` if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let result = self
            .encode()
            .and_then(|bytes| std::fs::write(path, bytes).map_err(BindError::from));

        match &result {
            Ok(()) => tracing::debug!("Saved {}", path.display()),
            Err(e) if self.report_errors => {
                tracing::error!("Failed to save file '{}': {}", path.display(), e);
            }
            Err(_) => {}
        }
        result
    }

    /// Serializes the current tree to a document string.
    ///
    /// # Errors
    /// Returns `BindError` if serialization fails.
    pub fn to_xml_string(&self) -> Result<String> {
        write_document_string(&self.to_element(), &self.write_config)
    }

    /// Writes the current tree into a fresh root element.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(self.root.root_tag());
        self.root.write(&mut element);
        element
    }

    fn decode(&self, xml: &str) -> Result<T> {
        let element = parse_document(xml, &self.read_config)?;
        let expected = self.root.root_tag();
        if element.name() != expected {
            return Err(BindError::root_mismatch(expected, element.name()));
        }

        let mut root = self.root.fresh();
        root.read(&element);
        Ok(root)
    }

    fn encode(&self) -> Result<Vec<u8>> {
        write_document(&self.to_element(), &self.write_config)
    }
}

impl<T: XmlRoot + Default> Default for BoundFile<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{XmlNode, read_attribute, read_children, write_attribute, write_children};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Item {
        value: i32,
    }

    impl XmlNode for Item {
        fn read(&mut self, element: &Element) {
            self.value = read_attribute(element, "value");
        }

        fn write(&self, element: &mut Element) {
            write_attribute(element, "value", &self.value);
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Doc {
        items: Vec<Item>,
    }

    impl XmlNode for Doc {
        fn read(&mut self, element: &Element) {
            self.items = read_children(element, "item");
        }

        fn write(&self, element: &mut Element) {
            write_children(element, "item", &self.items);
        }
    }

    impl XmlRoot for Doc {
        fn root_tag(&self) -> &str {
            "Doc"
        }

        fn fresh(&self) -> Self {
            Self::default()
        }
    }

    fn populated() -> BoundFile<Doc> {
        BoundFile::new(Doc {
            items: vec![Item { value: 1 }, Item { value: 2 }],
        })
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.xml");

        let file = populated();
        file.save(&path).expect("save");

        let mut loaded = BoundFile::<Doc>::default();
        loaded.load(&path).expect("load");
        assert_eq!(loaded.root(), file.root());
    }

    #[test]
    fn test_load_missing_file_keeps_tree() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut file = populated();
        let before = file.root().clone();

        let result = file.load(dir.path().join("missing.xml"));
        assert!(matches!(result, Err(BindError::Io(_))));
        assert_eq!(file.root(), &before);
    }

    #[test]
    fn test_load_malformed_keeps_tree() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.xml");
        std::fs::write(&path, "<Doc><item value=\"3\"></Doc>").expect("write");

        let mut file = populated();
        let before = file.root().clone();
        assert!(file.load(&path).is_err());
        assert_eq!(file.root(), &before);
    }

    #[test]
    fn test_load_wrong_root_keeps_tree() {
        let mut file = populated();
        let before = file.root().clone();
        let result = file.load_str("<Other/>");
        assert!(matches!(result, Err(BindError::RootMismatch { .. })));
        assert_eq!(file.root(), &before);
    }

    #[test]
    fn test_load_replaces_previous_tree() {
        let mut file = populated();
        file.load_str("<Doc><item value=\"9\"/></Doc>")
            .expect("load");
        assert_eq!(file.root().items, vec![Item { value: 9 }]);
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no_such_dir").join("doc.xml");
        let file = BoundFileBuilder::new()
            .report_errors(false)
            .build(Doc::default());
        assert!(file.save(&path).is_err());
    }

    #[test]
    fn test_builder_no_indent() {
        let file = BoundFileBuilder::new().no_indent().build(Doc {
            items: vec![Item { value: 5 }],
        });
        let xml = file.to_xml_string().expect("serialize");
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Doc><item value=\"5\"/></Doc>\n"
        );
    }
}
