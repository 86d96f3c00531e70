//! Tag-to-text conversion for problem statement regions.
//!
//! Only a handful of tags get special treatment: paragraphs, unordered lists
//! and their items. Everything else contributes its text content verbatim.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// A direct child of a statement region, classified by how it is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    /// Bare text between elements
    Text(&'a str),
    /// `<p>`
    Paragraph(ElementRef<'a>),
    /// `<ul>`
    List(ElementRef<'a>),
    /// `<li>`
    ListItem(ElementRef<'a>),
    /// Any other element
    Other(ElementRef<'a>),
}

impl<'a> Block<'a> {
    /// Classify a node. Comments, doctypes and processing instructions are not blocks.
    pub fn classify(node: NodeRef<'a, Node>) -> Option<Self> {
        match node.value() {
            Node::Text(text) => Some(Block::Text(text)),
            Node::Element(element) => {
                let el = ElementRef::wrap(node)?;
                Some(match element.name() {
                    "p" => Block::Paragraph(el),
                    "ul" => Block::List(el),
                    "li" => Block::ListItem(el),
                    _ => Block::Other(el),
                })
            }
            _ => None,
        }
    }

    /// Render this block, or `None` when it contributes nothing.
    pub fn render(self) -> Option<String> {
        match self {
            Block::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Block::Paragraph(el) => Some(format!("{}\n", text_content(el))),
            Block::List(el) => Some(format!("\n{}\n", render_children(el))),
            Block::ListItem(el) => Some(format!("- {}", text_content(el))),
            Block::Other(el) => Some(text_content(el)),
        }
    }
}

/// Render every direct child of `root` and join the non-empty results with newlines.
pub fn render_children(root: ElementRef<'_>) -> String {
    root.children()
        .filter_map(Block::classify)
        .filter_map(Block::render)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full text content of an element, untrimmed.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}
