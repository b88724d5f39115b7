//! `list` command: icons as a table or JSON.

use std::io::{self, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

use super::common::format_size;
use crate::sprite::Icon;
use crate::store::ViewMode;
use crate::utils::{plural_count, svg};

/// Write the icon listing to `out`.
pub fn write_list(
    out: &mut impl Write,
    icons: &[Icon],
    mode: ViewMode,
    fixed_size: u32,
    details: bool,
) -> io::Result<()> {
    let id_width = icons.iter().map(|i| i.id.len()).max().unwrap_or(0).max(2);
    let vb_width = icons
        .iter()
        .map(|i| i.view_box.len())
        .max()
        .unwrap_or(0)
        .max("viewBox".len());

    writeln!(
        out,
        "{:<id_width$}  {:<vb_width$}  {:>10}  {:>9}",
        "id".dimmed(),
        "viewBox".dimmed(),
        mode.label().dimmed(),
        "bytes".dimmed()
    )?;

    for icon in icons {
        writeln!(
            out,
            "{:<id_width$}  {:<vb_width$}  {:>10}  {:>9}",
            icon.id,
            icon.view_box,
            format_size(icon.display_size(mode, fixed_size)),
            icon.content.len()
        )?;
        if details {
            let colors = svg::extract_svg_colors(&icon.content);
            if !colors.is_empty() {
                writeln!(out, "{:id_width$}  colors: {}", "", colors.join(", "))?;
            }
        }
    }

    writeln!(out, "{}", plural_count(icons.len(), "icon").dimmed())
}

/// Write the icons as a pretty JSON array.
pub fn write_json(out: &mut impl Write, icons: &[Icon]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, icons)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> Vec<Icon> {
        vec![
            Icon::new("home", "0 0 24 24", "<path fill=\"#fff\"/>"),
            Icon::new("logo", "0 0 64 16", "<rect/>"),
        ]
    }

    #[test]
    fn test_write_list_actual() {
        let mut out = Vec::new();
        write_list(&mut out, &icons(), ViewMode::Actual, 36, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("home"));
        assert!(text.contains("64×16"));
        assert!(text.contains("2 icons"));
        assert!(!text.contains("colors:"));
    }

    #[test]
    fn test_write_list_fixed_with_details() {
        let mut out = Vec::new();
        write_list(&mut out, &icons(), ViewMode::Fixed, 36, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("36×36").count(), 2);
        assert!(text.contains("colors: #fff"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &icons()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[1]["id"], "logo");
        assert_eq!(parsed[1]["viewBox"], "0 0 64 16");
    }
}
