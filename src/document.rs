//! A minimal, read-only element tree built from the `quick-xml` event
//! stream.
//!
//! The tree only keeps what the converter needs to look at: tag names,
//! attributes in document order, and child nodes. It is never mutated after
//! parsing.

use std::str;

use log::trace;
use quick_xml::events::{BytesStart, Event};

use crate::error::Error;

/// A node of the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// Return the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart, reader: &quick_xml::Reader<&[u8]>) -> Result<Self, Error> {
        let name = str::from_utf8(start.name())
            .map_err(|e| Error::XmlParse(format!("Invalid tag name: {}", e)))?
            .to_string();

        // Unquoted and duplicated attributes are rejected by the iterator checks.
        let mut attributes = Vec::new();
        for attr in start.attributes().with_checks(true) {
            let attr = attr.map_err(|e| Error::XmlParse(format!("Invalid attribute: {}", e)))?;
            let key = str::from_utf8(attr.key)
                .map_err(|e| Error::XmlParse(format!("Invalid attribute name: {}", e)))?
                .to_string();
            let value = attr
                .unescape_and_decode_value(reader)
                .map_err(|e| Error::XmlParse(e.to_string()))?;
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// The tag name, exactly as written in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by its exact, case-sensitive name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over all `(name, value)` pairs in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A parsed SVG document. The root is guaranteed to be a single `svg` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse `text` into a document.
    ///
    /// Elements nested deeper than `max_depth` levels are rejected, which keeps
    /// the recursive tree walk bounded on hostile input.
    pub fn parse(text: &str, max_depth: usize) -> Result<Self, Error> {
        trace!("Document::parse");

        let mut reader = quick_xml::Reader::from_str(text);
        reader.trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut roots: Vec<Element> = Vec::new();
        let mut buf = Vec::new();
        loop {
            match reader.read_event(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    check_depth(stack.len(), max_depth)?;
                    let element = Element::from_start(e, &reader)?;
                    trace!("Document::parse: Open {:?}", element.name);
                    stack.push(element);
                }
                Ok(Event::Empty(ref e)) => {
                    check_depth(stack.len(), max_depth)?;
                    let element = Element::from_start(e, &reader)?;
                    trace!("Document::parse: Empty {:?}", element.name);
                    attach(&mut stack, &mut roots, element);
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::XmlParse("Unexpected closing tag".into()))?;
                    trace!("Document::parse: Close {:?}", element.name);
                    attach(&mut stack, &mut roots, element);
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape_and_decode(&reader)
                        .map_err(|e| Error::XmlParse(e.to_string()))?;
                    push_text(&mut stack, text)?;
                }
                Ok(Event::CData(ref e)) => {
                    push_text(&mut stack, String::from_utf8_lossy(e).into_owned())?;
                }
                Ok(Event::Comment(ref e)) => {
                    if let Some(parent) = stack.last_mut() {
                        parent
                            .children
                            .push(Node::Comment(String::from_utf8_lossy(e).into_owned()));
                    }
                }
                Ok(Event::Eof) => {
                    trace!("Document::parse: EOF");
                    break;
                }
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e.to_string())),
            }

            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::XmlParse(format!(
                "Unexpected end of document, <{}> is not closed",
                open.name
            )));
        }

        let mut roots = roots.into_iter();
        let root = roots.next().ok_or(Error::MissingSvg)?;
        if roots.next().is_some() {
            return Err(Error::MultipleRoots);
        }
        if root.name != "svg" {
            return Err(Error::UnexpectedRoot(root.name));
        }

        Ok(Self { root })
    }

    /// The root `svg` element.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn check_depth(open: usize, max_depth: usize) -> Result<(), Error> {
    if open >= max_depth {
        Err(Error::XmlParse(format!(
            "Elements are nested deeper than {} levels",
            max_depth
        )))
    } else {
        Ok(())
    }
}

/// Append character data to the open element. Outside of the root element
/// only whitespace is allowed.
fn push_text(stack: &mut Vec<Element>, text: String) -> Result<(), Error> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(Error::XmlParse(format!(
            "Unexpected text outside of the root element: {:?}",
            text.trim()
        ))),
    }
}

/// Append a finished element to its parent, or to the list of roots.
fn attach(stack: &mut Vec<Element>, roots: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => roots.push(element),
    }
}
