//! Icon matcher strategies.
//!
//! Sprites in the wild do not all use `<symbol>`. The matchers below are tried
//! in order and the first one that selects anything wins:
//!
//! | Strategy    | Selector        | Content      |
//! |-------------|-----------------|--------------|
//! | `Symbol`    | `symbol`        | inner markup |
//! | `DefsGroup` | `defs > g[id]`  | outer markup |
//! | `Group`     | `g[id]`         | outer markup |
//! | `AnyId`     | `[id]` but root | outer markup |
//!
//! `AnyId` happily picks up things like `<title id="...">`.

use super::document::{Document, Element};

/// One way of locating icon definitions in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Symbol,
    DefsGroup,
    Group,
    AnyId,
}

impl Strategy {
    /// Priority order.
    pub const ALL: [Self; 4] = [Self::Symbol, Self::DefsGroup, Self::Group, Self::AnyId];

    /// Selector-style label for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::DefsGroup => "defs > g[id]",
            Self::Group => "g[id]",
            Self::AnyId => "[id]",
        }
    }

    /// Indices of matching elements, in document order.
    pub fn select(self, doc: &Document<'_>) -> Vec<usize> {
        doc.elements()
            .iter()
            .enumerate()
            .filter(|(idx, elem)| self.matches(doc, *idx, elem))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn matches(self, doc: &Document<'_>, idx: usize, elem: &Element) -> bool {
        match self {
            Self::Symbol => elem.is("symbol"),
            Self::DefsGroup => {
                elem.is("g")
                    && elem.has_attr("id")
                    && doc.parent(idx).is_some_and(|p| p.is("defs"))
            }
            Self::Group => elem.is("g") && elem.has_attr("id"),
            Self::AnyId => idx != doc.root() && elem.has_attr("id"),
        }
    }

    /// Whether the icon body is the element's children rather than the element.
    ///
    /// A `<symbol>` is a template wrapper; a `<g>` carries its own transform
    /// and paint, so it is kept whole.
    #[inline]
    pub const fn uses_inner_markup(self) -> bool {
        matches!(self, Self::Symbol)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
