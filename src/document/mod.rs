//! Parsed HTML documents and the read-only queries the extractors run on them.
//!
//! [`Document`] owns the tree produced by `scraper`; [`Node`] is a cheap
//! borrowed handle to one element inside it. Nothing here mutates the tree:
//! annotation markup is skipped while reading text instead of being removed.

use scraper::{ElementRef, Html, Selector};

/// An immutable, parsed HTML page
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML page. Malformed markup is recovered, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select_all<'a, 'b>(
        &'a self,
        selector: &'b Selector,
    ) -> impl Iterator<Item = Node<'a>> + 'b
    where
        'a: 'b,
    {
        self.html.select(selector).map(Node::new)
    }

    /// The first element matching `selector`, in document order
    pub fn select_first<'a>(&'a self, selector: &Selector) -> Option<Node<'a>> {
        self.html.select(selector).next().map(Node::new)
    }
}

/// A borrowed element of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Descendants of this element matching `selector`, in document order
    pub fn select_all<'b>(&self, selector: &'b Selector) -> impl Iterator<Item = Node<'a>> + 'b
    where
        'a: 'b,
    {
        self.element.select(selector).map(Node::new)
    }

    /// The first descendant matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element.select(selector).next().map(Node::new)
    }

    /// Value of the attribute `name`, if set
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// All descendant text, concatenated in document order
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Descendant text, skipping every direct child element matching `strip`
    /// along with everything below it.
    pub fn text_without_children(&self, strip: &Selector) -> String {
        let mut text = String::new();
        for child in self.element.children() {
            if ElementRef::wrap(child).is_some_and(|element| strip.matches(&element)) {
                continue;
            }
            for node in child.descendants() {
                if let Some(fragment) = node.value().as_text() {
                    text.push_str(fragment);
                }
            }
        }
        text
    }

    /// The element immediately following this one among its siblings
    pub fn next_element_sibling(&self) -> Option<Node<'a>> {
        self.element
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(Node::new)
    }
}
