//! `grid` command: icon ids laid out in columns.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::sprite::Icon;

/// Fallback when the terminal width is unknown.
const DEFAULT_WIDTH: usize = 80;

/// Column count that fits `cell` wide cells into the terminal.
pub fn fit_columns(cell: usize) -> usize {
    let width = crossterm::terminal::size()
        .map(|(w, _)| usize::from(w))
        .unwrap_or(DEFAULT_WIDTH);
    (width / (cell + 2)).max(1)
}

/// Write at most `limit` icon ids, `columns` per row.
pub fn write_grid(
    out: &mut impl Write,
    icons: &[Icon],
    columns: usize,
    limit: usize,
) -> io::Result<()> {
    let columns = columns.max(1);
    let shown = &icons[..icons.len().min(limit)];
    let cell = shown.iter().map(|i| i.id.chars().count()).max().unwrap_or(0);

    for row in shown.chunks(columns) {
        let line = row
            .iter()
            .map(|icon| format!("{:<cell$}", icon.id))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }

    if icons.len() > shown.len() {
        let hidden = icons.len() - shown.len();
        writeln!(
            out,
            "{}",
            format!("... and {hidden} more (showing {} of {})", shown.len(), icons.len()).dimmed()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(n: usize) -> Vec<Icon> {
        (0..n).map(|i| Icon::new(format!("i{i}"), "0 0 24 24", "")).collect()
    }

    #[test]
    fn test_write_grid_rows() {
        let mut out = Vec::new();
        write_grid(&mut out, &icons(5), 2, 100).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, ["i0  i1", "i2  i3", "i4"]);
    }

    #[test]
    fn test_write_grid_limit() {
        let mut out = Vec::new();
        write_grid(&mut out, &icons(5), 10, 3).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("i0  i1  i2\n"));
        assert!(text.contains("and 2 more"));
        assert!(!text.contains("i3"));
    }

    #[test]
    fn test_fit_columns_positive() {
        assert!(fit_columns(500) >= 1);
    }
}
