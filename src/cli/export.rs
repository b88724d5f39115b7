//! `export` command: one standalone SVG file per icon.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::sprite::Icon;
use crate::store::ViewMode;
use crate::utils::svg::sanitize_svg_content;
use crate::{debug, log};

/// How each icon is rendered before writing.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub mode: ViewMode,
    pub fixed_size: u32,
    pub optimize: bool,
    pub sanitize: bool,
}

/// Write every icon into `dir`, returning the written paths in icon order.
pub fn export_icons(icons: &[Icon], dir: &Path, options: &ExportOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut names = FileNames::default();
    let mut written = Vec::with_capacity(icons.len());

    for icon in icons {
        let path = dir.join(format!("{}.svg", names.claim(&icon.id)));
        let svg = render_icon(icon, options)?;
        fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
        debug!("export"; "{} -> {}", icon.id, path.display());
        written.push(path);
    }

    Ok(written)
}

/// Standalone SVG text for `icon` under `options`.
pub fn render_icon(icon: &Icon, options: &ExportOptions) -> Result<String> {
    let mut svg = icon.to_svg(options.mode, options.fixed_size);
    if options.sanitize {
        svg = sanitize_svg_content(&svg);
    }
    if options.optimize {
        match optimize_svg(&svg) {
            Ok(optimized) => svg = optimized,
            // keep the raw markup rather than dropping the icon
            Err(e) => log!("export"; "`{}` not optimized: {:#}", icon.id, e),
        }
    }
    Ok(svg)
}

/// Normalize SVG text through usvg.
pub fn optimize_svg(content: &str) -> Result<String> {
    let usvg_options = usvg::Options {
        dpi: 96.0,
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(content.as_bytes(), &usvg_options)
        .context("Failed to parse SVG")?;

    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        ..Default::default()
    };
    Ok(tree.to_string(&write_options))
}

/// File-name-safe form of an icon id.
///
/// Keeps ASCII alphanumerics, `-`, `_` and `.`; everything else becomes `_`.
/// Leading dots are dropped so the result is never hidden or `..`.
pub fn file_stem(id: &str) -> String {
    let stem: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        "icon".to_string()
    } else {
        stem.to_string()
    }
}

/// Hands out unique stems: `a`, `a-2`, `a-3`, ...
#[derive(Default)]
struct FileNames {
    used: FxHashSet<String>,
    next: FxHashMap<String, usize>,
}

impl FileNames {
    fn claim(&mut self, id: &str) -> String {
        let base = file_stem(id);
        let mut n = self.next.get(&base).copied().unwrap_or(1);
        let mut candidate = if n == 1 {
            base.clone()
        } else {
            format!("{base}-{n}")
        };
        // a literal id like `a-2` may already hold a suffixed name
        while self.used.contains(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }
        self.next.insert(base, n + 1);
        self.used.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ExportOptions {
        ExportOptions {
            mode: ViewMode::Actual,
            fixed_size: 36,
            optimize: false,
            sanitize: false,
        }
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("icon-home"), "icon-home");
        assert_eq!(file_stem("a/b c"), "a_b_c");
        assert_eq!(file_stem("../x"), "_x");
        assert_eq!(file_stem("..."), "icon");
        assert_eq!(file_stem("ünï"), "_n_");
    }

    #[test]
    fn test_file_names_dedupe() {
        let mut names = FileNames::default();
        assert_eq!(names.claim("a"), "a");
        assert_eq!(names.claim("a"), "a-2");
        assert_eq!(names.claim("a"), "a-3");
        assert_eq!(names.claim("b"), "b");
        assert_eq!(names.claim("a/"), "a_");
    }

    #[test]
    fn test_file_names_suffix_collision() {
        let mut names = FileNames::default();
        assert_eq!(names.claim("a-2"), "a-2");
        assert_eq!(names.claim("a"), "a");
        assert_eq!(names.claim("a"), "a-3");
    }

    #[test]
    fn test_export_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let icons = vec![
            Icon::new("home", "0 0 24 24", "<path d=\"M0 0h1\"/>"),
            Icon::new("home", "0 0 24 24", "<circle r=\"1\"/>"),
        ];

        let written = export_icons(&icons, &out, &options()).unwrap();
        assert_eq!(written, [out.join("home.svg"), out.join("home-2.svg")]);
        let second = fs::read_to_string(&written[1]).unwrap();
        assert!(second.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">"));
        assert!(second.contains("<circle r=\"1\"/>"));
    }

    #[test]
    fn test_render_sanitized_fixed() {
        let icon = Icon::new("x", "0 0 24 24", "<script>alert(1)</script><rect onclick=\"x()\"/>");
        let svg = render_icon(
            &icon,
            &ExportOptions {
                mode: ViewMode::Fixed,
                sanitize: true,
                ..options()
            },
        )
        .unwrap();
        assert!(svg.contains("width=\"36\" height=\"36\""));
        assert!(!svg.contains("script"));
        assert!(!svg.contains("onclick"));
    }

    #[test]
    fn test_optimize_svg() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
            <rect x="1" y="1" width="10" height="10" fill="red"/>
        </svg>"#;
        let optimized = optimize_svg(svg).unwrap();
        assert!(optimized.starts_with("<svg"));
        assert!(!optimized.trim_end().contains('\n'));
    }

    #[test]
    fn test_optimize_invalid_keeps_raw() {
        let icon = Icon::new("broken", "0 0 24 24", "<path d=\"M0 0\"");
        let svg = render_icon(&icon, &ExportOptions { optimize: true, ..options() }).unwrap();
        assert!(svg.contains("<path d=\"M0 0\""));
    }
}
