//! Thin node interface over the parsed document.
//!
//! Extraction code only talks to [`DomNode`], so the HTML backend can be
//! swapped without touching the field heuristics.

use crate::error::ScrapeError;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Build a tree from raw page bytes.
///
/// html5ever never rejects input: broken or truncated markup still yields a
/// best-effort tree, and invalid UTF-8 is replaced rather than refused.
pub fn parse_document(raw: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(raw))
}

pub fn compile_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

pub trait DomNode<'a>: Sized {
    /// First descendant matching `selector`, in document order.
    fn find_first(&self, selector: &Selector) -> Option<Self>;

    /// All descendants matching `selector`, in document order.
    fn find_all(&self, selector: &Selector) -> Vec<Self>;

    /// Text of every descendant text node, each trimmed, blanks dropped,
    /// joined by a single space.
    fn text_content(&self) -> String;

    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// First non-blank text node after this element in document order,
    /// skipping the element's own contents.
    fn next_text(&self) -> Option<&'a str>;
}

impl<'a> DomNode<'a> for ElementRef<'a> {
    fn find_first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn find_all(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).collect()
    }

    fn text_content(&self) -> String {
        ElementRef::text(self)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn next_text(&self) -> Option<&'a str> {
        let mut current = Some(**self);

        while let Some(node) = current {
            for sibling in node.next_siblings() {
                for descendant in sibling.descendants() {
                    if let Node::Text(text) = descendant.value() {
                        if !text.trim().is_empty() {
                            return Some(&**text);
                        }
                    }
                }
            }
            current = node.parent();
        }

        None
    }
}
