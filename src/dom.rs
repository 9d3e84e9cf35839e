//! Owned, read-only document tree.
//!
//! html5ever hands back a reference-counted DOM with interior mutability. The extraction
//! engine only ever reads, so the parse result is converted once into plain owned values:
//! an element or a text node, with children in document order. Sibling access is a slice
//! of the parent's children plus a position.

use std::io::Read;

use anyhow::{Context, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

/// Parses UTF-8 HTML into an owned [`Document`].
pub fn parse_html(mut reader: impl Read) -> Result<Document> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut reader)
        .context("failed to parse HTML")?;

    Ok(Document {
        children: convert_children(&dom.document),
    })
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

// Comments, doctypes and processing instructions carry nothing the engine matches on.
fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => Some(Node::Element(Element {
            name: name.local.to_string(),
            attrs: attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            children: convert_children(handle),
        })),
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        _ => None,
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The element, if this node is an element with the given tag.
    pub fn element_named(&self, tag: &str) -> Option<&Element> {
        self.as_element().filter(|element| element.name == tag)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, key: &str, value: &str) -> bool {
        self.attr(key) == Some(value)
    }

    /// Exact token match against the `class` attribute split on single spaces.
    pub fn has_class(&self, token: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split(' ').any(|actual| actual == token))
            .unwrap_or(false)
    }

    pub fn first_element_child(&self) -> Option<&Element> {
        self.children.iter().find_map(Node::as_element)
    }

    /// Text of the first child, when that child is a text node.
    pub fn first_child_text(&self) -> Option<&str> {
        self.children.first().and_then(Node::as_text)
    }

    /// Short human-readable form for error messages, e.g. `<ul class="emojis">`.
    pub fn describe(&self) -> String {
        match self.attr("class") {
            Some(class) => format!("<{} class=\"{}\">", self.name, class),
            None => format!("<{}>", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(doc: &Document) -> &Element {
        let html = doc
            .children
            .iter()
            .find_map(|node| node.element_named("html"))
            .unwrap();
        html.children
            .iter()
            .find_map(|node| node.element_named("body"))
            .unwrap()
    }

    #[test]
    fn parse_html_keeps_elements_text_and_attributes() {
        let doc = parse_html(r#"<div id="content" class="a b"><h2>Fruit</h2></div>"#.as_bytes())
            .unwrap();
        let div = body(&doc).first_element_child().unwrap();

        assert_eq!(div.name, "div");
        assert_eq!(div.attr("id"), Some("content"));
        assert!(div.has_attr("id", "content"));
        assert!(!div.has_attr("id", "other"));

        let h2 = div.first_element_child().unwrap();
        assert_eq!(h2.first_child_text(), Some("Fruit"));
    }

    #[test]
    fn parse_html_drops_comments_and_preserves_whitespace_text() {
        let doc = parse_html("<ul><!-- note -->\n  <li>x</li></ul>".as_bytes()).unwrap();
        let ul = body(&doc).first_element_child().unwrap();

        assert_eq!(ul.children.len(), 2);
        assert_eq!(ul.children[0].as_text(), Some("\n  "));
        assert!(ul.children[1].element_named("li").is_some());
    }

    #[test]
    fn has_class_matches_whole_tokens_only() {
        let element = Element {
            name: "ul".to_string(),
            attrs: vec![("class".to_string(), "emojis-list emojis".to_string())],
            children: Vec::new(),
        };

        assert!(element.has_class("emojis"));
        assert!(element.has_class("emojis-list"));
        assert!(!element.has_class("emoji"));
        assert!(!element.has_class("list"));
    }

    #[test]
    fn has_class_is_false_without_class_attribute() {
        let element = Element {
            name: "span".to_string(),
            attrs: vec![("id".to_string(), "name".to_string())],
            children: Vec::new(),
        };

        assert!(!element.has_class("name"));
    }

    #[test]
    fn first_element_child_skips_text_nodes() {
        let element = Element {
            name: "li".to_string(),
            attrs: Vec::new(),
            children: vec![
                Node::Text("  ".to_string()),
                Node::Element(Element {
                    name: "div".to_string(),
                    attrs: Vec::new(),
                    children: Vec::new(),
                }),
            ],
        };

        assert_eq!(element.first_element_child().map(|e| e.name.as_str()), Some("div"));
        assert_eq!(element.first_child_text(), Some("  "));
    }

    #[test]
    fn describe_includes_class_when_present() {
        let element = Element {
            name: "ul".to_string(),
            attrs: vec![("class".to_string(), "emojis".to_string())],
            children: Vec::new(),
        };

        assert_eq!(element.describe(), "<ul class=\"emojis\">");
    }
}
