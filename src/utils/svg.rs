//! SVG and file helpers.
//!
//! - `is_valid_svg_file()` / `is_valid_svg_url()` - intake validation
//! - `sanitize_svg_content()` - strip scripts and event handlers
//! - `format_file_size()` - human-readable byte counts
//! - `extract_svg_colors()` - distinct color literals in markup

use std::sync::LazyLock;

use regex::Regex;

use super::mime;

/// MIME types accepted for sprite files.
pub const SVG_MIME_TYPES: &[&str] = &[mime::types::SVG, mime::types::TEXT_XML, mime::types::XML];

/// Accept a file if its MIME type is an XML/SVG type or its name ends in `.svg`.
pub fn is_valid_svg_file(name: &str, mime_type: &str) -> bool {
    SVG_MIME_TYPES.contains(&mime_type) || name.to_ascii_lowercase().ends_with(".svg")
}

/// Accept a URL whose path ends in `.svg`. Query strings and fragments are ignored.
pub fn is_valid_svg_url(url: &str) -> bool {
    url::Url::parse(url).is_ok_and(|u| u.path().to_ascii_lowercase().ends_with(".svg"))
}

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex"));
static HANDLER_DQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s*\bon\w+\s*=\s*"[^"]*""#).expect("valid regex"));
static HANDLER_SQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\bon\w+\s*=\s*'[^']*'").expect("valid regex"));
static JS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("valid regex"));
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9a-fA-F]{6}|#[0-9a-fA-F]{3}|rgba?\([^)]+\)").expect("valid regex")
});

/// Remove `<script>` blocks, inline event handlers and `javascript:` URLs.
pub fn sanitize_svg_content(content: &str) -> String {
    let out = SCRIPT_RE.replace_all(content, "");
    let out = HANDLER_DQ_RE.replace_all(&out, "");
    let out = HANDLER_SQ_RE.replace_all(&out, "");
    JS_URL_RE.replace_all(&out, "").into_owned()
}

/// Format a byte count as `0 B`, `512 B`, `1.5 KB`, `2 MB`, ...
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[unit])
    } else {
        format!("{rounded:.1} {}", UNITS[unit])
    }
}

/// Distinct color literals in first-seen order.
pub fn extract_svg_colors(content: &str) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for m in COLOR_RE.find_iter(content) {
        if !colors.iter().any(|c| c == m.as_str()) {
            colors.push(m.as_str().to_string());
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_svg_file() {
        assert!(is_valid_svg_file("icons.svg", ""));
        assert!(is_valid_svg_file("ICONS.SVG", ""));
        assert!(is_valid_svg_file("sprite.xml", "application/xml"));
        assert!(is_valid_svg_file("blob", "image/svg+xml"));
        assert!(!is_valid_svg_file("photo.png", "image/png"));
        assert!(!is_valid_svg_file("notes.txt", "text/plain; charset=utf-8"));
    }

    #[test]
    fn test_is_valid_svg_url() {
        assert!(is_valid_svg_url("https://example.com/sprite.svg"));
        assert!(is_valid_svg_url("https://example.com/a/ICONS.SVG?v=2#top"));
        assert!(!is_valid_svg_url("https://example.com/sprite.png"));
        assert!(!is_valid_svg_url("https://example.com/"));
        assert!(!is_valid_svg_url("sprite.svg"));
        assert!(!is_valid_svg_url("not a url"));
    }

    #[test]
    fn test_sanitize_removes_scripts() {
        let input = r#"<svg><script type="text/javascript">alert(1)</script><path d="M0"/><SCRIPT>
x()
</SCRIPT></svg>"#;
        assert_eq!(sanitize_svg_content(input), r#"<svg><path d="M0"/></svg>"#);
    }

    #[test]
    fn test_sanitize_removes_handlers() {
        let input = r#"<g onclick="evil()" onload='x()' fill="red"><a href="javascript:void(0)"/></g>"#;
        assert_eq!(
            sanitize_svg_content(input),
            r#"<g fill="red"><a href="void(0)"/></g>"#
        );
    }

    #[test]
    fn test_sanitize_keeps_attributes_containing_on() {
        let input = r#"<text font="x" version="1.1" data-font="y">on</text>"#;
        assert_eq!(sanitize_svg_content(input), input);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_extract_svg_colors() {
        let colors = extract_svg_colors(
            r##"<path fill="#fff" stroke="#A0B1C2"/><path fill="#fff" stop-color="rgb(1, 2, 3)" color="rgba(0,0,0,.5)"/>"##,
        );
        assert_eq!(colors, ["#fff", "#A0B1C2", "rgb(1, 2, 3)", "rgba(0,0,0,.5)"]);
    }

    #[test]
    fn test_extract_svg_colors_longest_prefix() {
        let colors = extract_svg_colors(r##"<g fill="#ffff" stroke="#11223344"/>"##);
        assert_eq!(colors, ["#fff", "#112233"]);
    }
}
