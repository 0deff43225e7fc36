//! HTML document tree adapter.
//!
//! Wraps the `scraper` crate behind the [`QueryNode`] seam so the extractor
//! never touches the HTML library directly. Marker lookup walks descendants
//! in document order rather than compiling CSS selectors; the extractor only
//! ever matches single class names.

use lodewatch_core::QueryNode;
use scraper::{ElementRef, Html};

use crate::error::DocumentError;

/// A parsed, queryable HTML document.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Builds a document tree from raw page bytes.
    ///
    /// This is the only fallible step between response body and extracted
    /// records: bytes that cannot be interpreted as a document at all are
    /// rejected here. The parser itself is lenient, so structurally odd but
    /// decodable markup still produces a tree (and later an empty result if
    /// nothing matches).
    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes)?;

        Ok(Self {
            html: Html::parse_document(text),
        })
    }

    /// Returns the root element for queries.
    pub fn root(&self) -> DocNode<'_> {
        DocNode {
            element: self.html.root_element(),
        }
    }
}

/// A queryable element handle, borrowed from a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct DocNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> QueryNode for DocNode<'a> {
    fn find_marked(&self, class: &str) -> Vec<Self> {
        self.element
            .descendants()
            .skip(1) // descendants only, not the node itself
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().classes().any(|c| c == class))
            .map(|element| Self { element })
            .collect()
    }

    fn inner_text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = Document::parse(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, DocumentError::Encoding(_)));
    }

    #[test]
    fn test_find_marked_in_document_order() {
        let document = Document::parse(
            br#"<div>
                <span class="entry">first</span>
                <div><span class="entry">second</span></div>
                <span class="entry">third</span>
            </div>"#,
        )
        .unwrap();

        let texts: Vec<String> = document
            .root()
            .find_marked("entry")
            .iter()
            .map(QueryNode::inner_text)
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_find_marked_matches_one_of_several_classes() {
        let document =
            Document::parse(br#"<i class="world-ic__1 js__tooltip"></i>"#).unwrap();
        assert!(document.root().has_marked("world-ic__1"));
        assert!(document.root().has_marked("js__tooltip"));
        assert!(!document.root().has_marked("world-ic__2"));
    }

    #[test]
    fn test_class_matching_is_case_sensitive() {
        let document = Document::parse(br#"<span class="Entry">text</span>"#).unwrap();
        assert!(!document.root().has_marked("entry"));
        assert!(document.root().has_marked("Entry"));
    }

    #[test]
    fn test_inner_text_is_trimmed() {
        let document =
            Document::parse(b"<h2 class=\"header\">\n\t  Chaos  \n</h2>").unwrap();

        let header = document.root().first_marked("header").unwrap();
        assert_eq!(header.inner_text(), "Chaos");
    }

    #[test]
    fn test_inner_text_spans_nested_elements() {
        let document =
            Document::parse(br#"<div class="name"><p>Cerberus</p></div>"#).unwrap();

        let name = document.root().first_marked("name").unwrap();
        assert_eq!(name.inner_text(), "Cerberus");
    }

    #[test]
    fn test_first_marked_missing_is_none() {
        let document = Document::parse(b"<div></div>").unwrap();
        assert!(document.root().first_marked("absent").is_none());
    }
}
