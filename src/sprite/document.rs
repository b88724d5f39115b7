//! Minimal element tree over an SVG/XML source.
//!
//! The source is checked and walked with `roxmltree`, which rejects anything
//! that is not namespace-well-formed XML (unknown entities, `<` in attribute
//! values, undeclared prefixes, stray content around the root). Only what the
//! icon matchers need is kept: local element names, attributes, parent links
//! and byte spans into the original text. Markup is never re-serialized; icon
//! content is sliced straight out of the source.

use std::ops::Range;

use roxmltree::ParsingOptions;
use thiserror::Error;

/// The sprite source is not a usable XML document.
#[derive(Debug, Error)]
#[error("malformed XML: {0}")]
pub struct ParseError(#[from] roxmltree::Error);

/// One element of the parsed tree.
#[derive(Debug, Clone)]
pub struct Element {
    /// Local name (`svg:symbol` is stored as `symbol`).
    pub name: String,
    /// Attributes in source order, keyed by local name.
    pub attrs: Vec<(String, String)>,
    /// Index of the parent element, `None` for the root.
    pub parent: Option<usize>,
    /// Span of the whole element, start tag through end tag.
    pub outer: Range<usize>,
    /// Span between the start and end tag (empty for `<x/>`).
    pub inner: Range<usize>,
}

impl Element {
    /// Attribute value by local name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Parsed element tree borrowing the source text.
#[derive(Debug)]
pub struct Document<'a> {
    source: &'a str,
    /// Elements in document order; index 0 is the root.
    elements: Vec<Element>,
}

impl<'a> Document<'a> {
    /// Parse `source`, failing on anything a strict XML parser would reject.
    ///
    /// A DOCTYPE (with internal entity declarations) is allowed, as sprite
    /// exports from older editors still carry one.
    pub fn parse(source: &'a str) -> Result<Self, ParseError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let tree = roxmltree::Document::parse_with_options(source, options)?;

        let mut elements: Vec<Element> = Vec::new();
        // elements whose span is still open, innermost last
        let mut open: Vec<usize> = Vec::new();
        for node in tree.root_element().descendants().filter(|n| n.is_element()) {
            let outer = node.range();
            while open.last().is_some_and(|&i| elements[i].outer.end <= outer.start) {
                open.pop();
            }
            let parent = open.last().copied();
            let inner = inner_span(source, &outer);

            open.push(elements.len());
            elements.push(Element {
                name: node.tag_name().name().to_string(),
                attrs: node
                    .attributes()
                    .map(|a| (a.name().to_string(), a.value().to_string()))
                    .collect(),
                parent,
                outer,
                inner,
            });
        }

        Ok(Self { source, elements })
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }

    /// Index of the root element.
    #[inline]
    pub const fn root(&self) -> usize {
        0
    }

    /// Parent element, if any.
    pub fn parent(&self, idx: usize) -> Option<&Element> {
        self.elements[idx].parent.map(|p| &self.elements[p])
    }

    /// Nearest element named `name`, starting at `idx` itself and walking up.
    pub fn closest(&self, idx: usize, name: &str) -> Option<&Element> {
        let mut current = Some(idx);
        while let Some(i) = current {
            let elem = &self.elements[i];
            if elem.is(name) {
                return Some(elem);
            }
            current = elem.parent;
        }
        None
    }

    /// Markup between the element's tags.
    pub fn inner_markup(&self, idx: usize) -> &'a str {
        &self.source[self.elements[idx].inner.clone()]
    }

    /// Markup of the element including its own tags.
    pub fn outer_markup(&self, idx: usize) -> &'a str {
        &self.source[self.elements[idx].outer.clone()]
    }
}

/// Span between the start tag's `>` and the end tag's `</` of a well-formed
/// element occupying `outer`.
fn inner_span(source: &str, outer: &Range<usize>) -> Range<usize> {
    let markup = &source.as_bytes()[outer.clone()];

    let mut quote = None;
    let mut tag_end = markup.len();
    for (i, &b) in markup.iter().enumerate() {
        match (quote, b) {
            (None, b'"' | b'\'') => quote = Some(b),
            (Some(q), _) if b == q => quote = None,
            (None, b'>') => {
                tag_end = i + 1;
                break;
            }
            _ => {}
        }
    }

    let start = outer.start + tag_end;
    if tag_end == markup.len() {
        return start..start;
    }
    let end = markup
        .windows(2)
        .rposition(|w| w == b"</")
        .map_or(start, |i| outer.start + i);
    start..end.max(start)
}
