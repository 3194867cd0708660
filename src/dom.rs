//! Read-only view of parsed DOM elements

use scraper::{ElementRef, Html, Node};

/// A parsed element as seen by the locator engine
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    node: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub fn new(node: ElementRef<'a>) -> Self {
        Self { node }
    }

    /// Lower-case local tag name (`svg` for namespaced SVG roots too)
    pub fn tag(&self) -> &'a str {
        self.node.value().name()
    }

    /// Trimmed attribute value, or `None` when absent or blank
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node
            .value()
            .attr(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// First non-blank direct text child, trimmed; descendants' text excluded.
    ///
    /// Only one text node is used because XPath `text()` in a string context
    /// evaluates to the first text node alone.
    pub fn own_text(&self) -> Option<String> {
        self.node
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(chunk) => Some(chunk.trim()),
                _ => None,
            })
            .find(|chunk| !chunk.is_empty())
            .map(str::to_string)
    }

    /// Descendant elements in document order, excluding this element
    pub fn descendants(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        self.node
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Element::new)
    }

    /// Ancestor elements, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        self.node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(Element::new)
    }
}

/// Every element of the document in document order
pub fn document_elements(document: &Html) -> impl Iterator<Item = Element<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .map(Element::new)
}
