//! Icon record produced by the sprite parser.

use serde::{Deserialize, Serialize};

use crate::store::ViewMode;

/// viewBox used when neither the icon nor an enclosing `<svg>` defines one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Namespace written on standalone icon documents.
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A single icon extracted from a sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Source `id`, or `icon-<index>` when the element had none.
    pub id: String,
    #[serde(rename = "viewBox")]
    pub view_box: String,
    /// Raw markup sliced from the sprite, unsanitized.
    pub content: String,
}

impl Icon {
    pub fn new(id: impl Into<String>, view_box: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view_box: view_box.into(),
            content: content.into(),
        }
    }

    /// Intrinsic `(width, height)` from the viewBox, if it is four numbers.
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        let parts: Vec<f64> = self
            .view_box
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        match parts.as_slice() {
            [_, _, w, h] if *w >= 0.0 && *h >= 0.0 => Some((*w, *h)),
            _ => None,
        }
    }

    /// Display size for `mode`: the viewBox extent, or a `fixed_size` square.
    pub fn display_size(&self, mode: ViewMode, fixed_size: u32) -> Option<(f64, f64)> {
        match mode {
            ViewMode::Fixed => Some((f64::from(fixed_size), f64::from(fixed_size))),
            ViewMode::Actual => self.dimensions(),
        }
    }

    /// Standalone SVG document for this icon.
    ///
    /// `Fixed` pins width/height to `fixed_size`; `Actual` leaves sizing to
    /// the viewBox.
    pub fn to_svg(&self, mode: ViewMode, fixed_size: u32) -> String {
        let mut svg = String::with_capacity(self.content.len() + 96);
        svg.push_str("<svg xmlns=\"");
        svg.push_str(SVG_NS);
        svg.push_str("\" viewBox=\"");
        push_escaped_attr(&mut svg, &self.view_box);
        svg.push('"');
        if mode == ViewMode::Fixed {
            svg.push_str(&format!(" width=\"{fixed_size}\" height=\"{fixed_size}\""));
        }
        svg.push('>');
        svg.push_str(&self.content);
        svg.push_str("</svg>");
        svg
    }
}

fn push_escaped_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
