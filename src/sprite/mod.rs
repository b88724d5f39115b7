//! SVG sprite parsing.
//!
//! Turns sprite text into an ordered list of [`Icon`] records.
//!
//! # Pipeline
//!
//! ```text
//! sprite text
//!     │
//!     ▼
//! ┌──────────┐
//! │ document │ ──► element tree + byte spans (parse errors → no icons)
//! └────┬─────┘
//!      │
//!      ▼
//! ┌──────────┐
//! │ strategy │ ──► symbol → defs > g[id] → g[id] → [id], first non-empty wins
//! └────┬─────┘
//!      │
//!      ▼
//!   Vec<Icon>   id / viewBox / content per matched element
//! ```

mod document;
mod icon;
mod strategy;

use document::Document;
pub use icon::{DEFAULT_VIEW_BOX, Icon};
pub use strategy::Strategy;

use crate::debug;

/// Extract icons from sprite text.
///
/// Returns an empty list when the text is not well-formed XML or when no
/// strategy matches anything.
pub fn parse_sprite(source: &str) -> Vec<Icon> {
    parse_sprite_with_strategy(source)
        .map(|(icons, _)| icons)
        .unwrap_or_default()
}

/// Like [`parse_sprite`], also reporting which strategy produced the icons.
pub fn parse_sprite_with_strategy(source: &str) -> Option<(Vec<Icon>, Strategy)> {
    let doc = match Document::parse(source) {
        Ok(doc) => doc,
        Err(e) => {
            debug!("parse"; "not a valid SVG document: {}", e);
            return None;
        }
    };

    let (strategy, matched) = Strategy::ALL
        .into_iter()
        .map(|s| (s, s.select(&doc)))
        .find(|(_, matched)| !matched.is_empty())?;

    debug!("parse"; "{} element(s) matched `{}`", matched.len(), strategy);

    let icons = matched
        .into_iter()
        .enumerate()
        .map(|(index, idx)| build_icon(&doc, idx, index, strategy))
        .collect();

    Some((icons, strategy))
}

fn build_icon(doc: &Document<'_>, idx: usize, index: usize, strategy: Strategy) -> Icon {
    let elem = doc.get(idx);

    let id = match elem.attr("id") {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("icon-{index}"),
    };

    let view_box = elem
        .attr("viewBox")
        .filter(|v| !v.is_empty())
        .or_else(|| {
            doc.closest(idx, "svg")
                .and_then(|svg| svg.attr("viewBox"))
                .filter(|v| !v.is_empty())
        })
        .unwrap_or(DEFAULT_VIEW_BOX)
        .to_string();

    let content = if strategy.uses_inner_markup() {
        doc.inner_markup(idx)
    } else {
        doc.outer_markup(idx)
    };

    Icon::new(id, view_box, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol() {
        let icons = parse_sprite(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><symbol id="x" viewBox="0 0 1 1"><path d="M0 0h1"/></symbol></svg>"#,
        );
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].id, "x");
        assert_eq!(icons[0].view_box, "0 0 1 1");
        assert_eq!(icons[0].content, r#"<path d="M0 0h1"/>"#);
    }

    #[test]
    fn test_nothing_to_match() {
        assert!(parse_sprite(r#"<svg viewBox="0 0 5 5"><path d="M0"/><circle r="1"/></svg>"#).is_empty());
        assert!(parse_sprite(r#"<svg id="only-root"/>"#).is_empty());
    }

    #[test]
    fn test_parser_error_yields_empty() {
        assert!(parse_sprite(r#"<svg><symbol id="a"></svg>"#).is_empty());
        assert!(parse_sprite("").is_empty());
        assert!(parse_sprite("{\"contents\": null}").is_empty());
    }

    #[test]
    fn test_view_box_inheritance() {
        let icons = parse_sprite(
            r#"<svg viewBox="0 0 48 48"><symbol id="a"/><symbol id="b" viewBox="0 0 8 8"/></svg>"#,
        );
        assert_eq!(icons[0].view_box, "0 0 48 48");
        assert_eq!(icons[1].view_box, "0 0 8 8");

        let icons = parse_sprite(r#"<svg><symbol id="a"/></svg>"#);
        assert_eq!(icons[0].view_box, DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_view_box_from_nearest_svg_only() {
        // The nearest <svg> has no viewBox, so the outer one is not consulted.
        let icons = parse_sprite(
            r#"<svg viewBox="0 0 99 99"><svg><symbol id="a"/></svg></svg>"#,
        );
        assert_eq!(icons[0].view_box, DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_synthesized_ids() {
        let icons = parse_sprite(r#"<svg><symbol/><symbol id=""/><symbol id="c"/></svg>"#);
        let ids: Vec<_> = icons.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["icon-0", "icon-1", "c"]);
    }

    #[test]
    fn test_duplicate_ids_kept() {
        let icons = parse_sprite(r#"<svg><symbol id="a"/><symbol id="a"/></svg>"#);
        assert_eq!(icons.len(), 2);
    }

    #[test]
    fn test_symbol_preferred_over_groups() {
        let (icons, strategy) = parse_sprite_with_strategy(
            r#"<svg><defs><g id="g1"/></defs><symbol id="s1"/></svg>"#,
        )
        .unwrap();
        assert_eq!(strategy, Strategy::Symbol);
        assert_eq!(icons[0].id, "s1");
    }

    #[test]
    fn test_defs_group_fallback_keeps_outer_markup() {
        let src = r#"<svg viewBox="0 0 20 20"><defs><g id="home" fill="red"><path d="M1"/></g></defs><g id="other"/></svg>"#;
        let (icons, strategy) = parse_sprite_with_strategy(src).unwrap();
        assert_eq!(strategy, Strategy::DefsGroup);
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].id, "home");
        assert_eq!(icons[0].view_box, "0 0 20 20");
        assert_eq!(icons[0].content, r#"<g id="home" fill="red"><path d="M1"/></g>"#);
    }

    #[test]
    fn test_group_fallback() {
        let (icons, strategy) =
            parse_sprite_with_strategy(r#"<svg><g id="a"/><g/><g id="b"/></svg>"#).unwrap();
        assert_eq!(strategy, Strategy::Group);
        let ids: Vec<_> = icons.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_any_id_fallback_captures_title() {
        let (icons, strategy) = parse_sprite_with_strategy(
            r#"<svg id="root"><title id="label">Icons</title><path id="p" d="M0"/></svg>"#,
        )
        .unwrap();
        assert_eq!(strategy, Strategy::AnyId);
        let ids: Vec<_> = icons.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["label", "p"]);
        assert_eq!(icons[0].content, r#"<title id="label">Icons</title>"#);
    }

    #[test]
    fn test_not_namespace_well_formed_yields_nothing() {
        assert!(parse_sprite(r#"<svg><symbol id="a"><title>&nbsp;</title></symbol></svg>"#).is_empty());
        assert!(parse_sprite(r#"<svg><symbol id="a<b"/></svg>"#).is_empty());
        assert!(parse_sprite(r#"<svg><x:symbol id="a"/></svg>"#).is_empty());
        assert_eq!(
            parse_sprite(r#"<svg xmlns:x="urn:x"><x:symbol id="a"/></svg>"#).len(),
            1
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let src = include_str!("../../assets/demo-sprite.svg");
        let first = parse_sprite(src);
        let second = parse_sprite(src);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_content_is_raw_slice() {
        let src = "<svg><symbol id=\"a\">\n  <!-- c -->\n  <path d=\"M0&#10;\"/>\n</symbol></svg>";
        let icons = parse_sprite(src);
        assert_eq!(icons[0].content, "\n  <!-- c -->\n  <path d=\"M0&#10;\"/>\n");
    }
}
