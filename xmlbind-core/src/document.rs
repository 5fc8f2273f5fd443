//! XML document parsing and serialization.
//!
//! Documents are read with the `quick-xml` pull reader into an [`Element`]
//! tree and written back with its `Writer`, always preceded by a
//! `version="1.0"` / `encoding="UTF-8"` declaration.

use crate::element::Element;
use crate::error::{BindError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

/// Options applied while reading a document.
///
/// By default text is kept verbatim, except that runs made only of
/// whitespace (the indentation between child elements) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadConfig {
    /// Trim leading and trailing whitespace from every element's text.
    pub trim_text: bool,
    /// Keep whitespace-only text runs instead of dropping them.
    pub keep_blank_text: bool,
}

impl ReadConfig {
    /// Read options that trim every element's text.
    #[must_use]
    pub fn trimmed() -> Self {
        Self {
            trim_text: true,
            ..Self::default()
        }
    }
}

/// Indentation used when writing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    /// Byte repeated for each indentation level.
    pub fill: u8,
    /// Number of fill bytes per level.
    pub width: usize,
}

/// Options applied while writing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConfig {
    /// Indentation, or `None` for a single-line document.
    pub indent: Option<Indent>,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            indent: Some(Indent {
                fill: b'\t',
                width: 1,
            }),
        }
    }
}

/// Parses an XML document into its root element.
///
/// # Arguments
/// * `xml` - Document content
/// * `config` - Read options
///
/// # Returns
/// The root element with all descendants.
///
/// # Errors
/// Returns `BindError` if the XML is malformed, has no root, has more than
/// one root, or ends inside an open element.
pub fn parse_document(xml: &str, config: &ReadConfig) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut run = TextRun::default();
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf)?;
        if matches!(event, Event::Start(_) | Event::Empty(_) | Event::End(_)) {
            run.flush(stack.last_mut(), config);
        }
        match event {
            Event::Start(ref e) => {
                let element = start_element(e)?;
                if stack.is_empty() {
                    ensure_single_root(root.as_ref(), &element)?;
                }
                stack.push(element);
            }
            Event::Empty(ref e) => {
                let element = start_element(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                if let Some(mut element) = stack.pop() {
                    if config.trim_text {
                        element.trim_text();
                    }
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Event::Text(ref t) => {
                let raw = std::str::from_utf8(t.as_ref())?;
                run.text.push_str(&quick_xml::escape::unescape(raw)?);
            }
            Event::GeneralRef(ref r) => {
                let name = std::str::from_utf8(r.as_ref())?;
                let reference = format!("&{name};");
                run.text.push_str(&quick_xml::escape::unescape(&reference)?);
            }
            Event::CData(ref c) => {
                run.text.push_str(std::str::from_utf8(c.as_ref())?);
                run.cdata = true;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(BindError::UnexpectedEof {
            element: open.name().to_string(),
        });
    }

    root.ok_or(BindError::NoRoot)
}

/// Character data collected between two tags.
#[derive(Default)]
struct TextRun {
    text: String,
    cdata: bool,
}

impl TextRun {
    /// Appends the run to the open element and resets it. Whitespace-only
    /// runs without CDATA are dropped unless the config keeps them.
    fn flush(&mut self, current: Option<&mut Element>, config: &ReadConfig) {
        let blank = !self.cdata && self.text.chars().all(char::is_whitespace);
        if let Some(current) = current.filter(|_| !blank || config.keep_blank_text) {
            current.push_text(&self.text);
        }
        self.text.clear();
        self.cdata = false;
    }
}

/// Builds an element from a start tag, unescaping attribute values.
fn start_element(e: &BytesStart<'_>) -> Result<Element> {
    let qname = e.name();
    let mut element = Element::new(std::str::from_utf8(qname.as_ref())?);

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        element.set_attribute(key, quick_xml::escape::unescape(raw)?);
    }

    Ok(element)
}

/// Attaches a completed element to its parent, or installs it as the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(element),
        None => {
            ensure_single_root(root.as_ref(), &element)?;
            *root = Some(element);
        }
    }
    Ok(())
}

fn ensure_single_root(root: Option<&Element>, candidate: &Element) -> Result<()> {
    match root {
        Some(first) => Err(BindError::MultipleRoots {
            first: first.name().to_string(),
            second: candidate.name().to_string(),
        }),
        None => Ok(()),
    }
}

/// Serializes a root element into a complete XML document.
///
/// # Arguments
/// * `root` - Root element
/// * `config` - Write options
///
/// # Returns
/// UTF-8 document bytes, terminated by a newline.
///
/// # Errors
/// Returns `BindError` if the writer fails.
pub fn write_document(root: &Element, config: &WriteConfig) -> Result<Vec<u8>> {
    let mut writer = match config.indent {
        Some(indent) => Writer::new_with_indent(Vec::new(), indent.fill, indent.width),
        None => Writer::new(Vec::new()),
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serializes a root element into a document string.
///
/// # Errors
/// Returns `BindError` if the writer fails.
pub fn write_document_string(root: &Element, config: &WriteConfig) -> Result<String> {
    let bytes = write_document(root, config)?;
    String::from_utf8(bytes).map_err(|e| BindError::Utf8(e.utf8_error()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for attr in element.attributes() {
        start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !element.text().is_empty() {
        writer.write_event(Event::Text(BytesText::new(element.text())))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;

    Ok(())
}
