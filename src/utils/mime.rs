//! Extension-based MIME guessing.
//!
//! Local files carry no Content-Type, so intake derives one from the file
//! name before deciding whether the file can hold a sprite.

use std::path::Path;

pub mod types {
    pub const SVG: &str = "image/svg+xml";
    pub const XML: &str = "application/xml";
    pub const TEXT_XML: &str = "text/xml";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Extensions a user is likely to point the tool at, mapped to their type.
const KNOWN: &[(&str, &str)] = &[
    ("svg", types::SVG),
    ("xml", types::XML),
    ("xsl", types::TEXT_XML),
    ("json", "application/json"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("txt", "text/plain"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
];

/// MIME type for `path`, `application/octet-stream` when unknown.
pub fn from_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return types::OCTET_STREAM;
    };
    KNOWN
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(types::OCTET_STREAM, |&(_, mime)| mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_like_extensions() {
        assert_eq!(from_path(Path::new("a/icons.svg")), types::SVG);
        assert_eq!(from_path(Path::new("ICONS.SVG")), types::SVG);
        assert_eq!(from_path(Path::new("sprite.xml")), types::XML);
    }

    #[test]
    fn test_other_extensions() {
        assert_eq!(from_path(Path::new("README")), types::OCTET_STREAM);
        assert_eq!(from_path(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(from_path(Path::new("archive.tar.gz")), types::OCTET_STREAM);
    }
}
