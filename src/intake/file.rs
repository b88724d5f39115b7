//! Local file intake.

use std::fs;
use std::path::Path;

use super::IntakeError;
use crate::utils::{mime, svg};

/// Validate and read a sprite file.
///
/// The file must look like SVG/XML (by extension-derived MIME type or `.svg`
/// name), be no larger than `max_size` bytes, and hold UTF-8 text.
pub fn load_file(path: &Path, max_size: u64) -> Result<String, IntakeError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime::from_path(path);

    if !svg::is_valid_svg_file(&name, mime_type) {
        return Err(IntakeError::InvalidFile {
            name,
            mime: mime_type,
        });
    }

    let size = fs::metadata(path)
        .map_err(|e| IntakeError::Io(path.to_path_buf(), e))?
        .len();
    if size > max_size {
        return Err(IntakeError::TooLarge {
            name,
            size: svg::format_file_size(size),
            limit: svg::format_file_size(max_size),
        });
    }

    let bytes = fs::read(path).map_err(|e| IntakeError::Io(path.to_path_buf(), e))?;
    String::from_utf8(bytes).map_err(|_| IntakeError::Encoding(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 1024;

    #[test]
    fn test_load_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.svg");
        fs::write(&path, "<svg/>").unwrap();
        assert_eq!(load_file(&path, LIMIT).unwrap(), "<svg/>");
    }

    #[test]
    fn test_load_xml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.XML");
        fs::write(&path, "<svg/>").unwrap();
        assert!(load_file(&path, LIMIT).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.png");
        fs::write(&path, "<svg/>").unwrap();
        assert!(matches!(
            load_file(&path, LIMIT),
            Err(IntakeError::InvalidFile { mime: "image/png", .. })
        ));
    }

    #[test]
    fn test_rejects_large_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.svg");
        fs::write(&path, vec![b' '; 2048]).unwrap();
        let err = load_file(&path, LIMIT).unwrap_err();
        assert_eq!(err.to_string(), "`big.svg` is 2 KB, larger than the 1 KB limit");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_file(&dir.path().join("gone.svg"), LIMIT),
            Err(IntakeError::Io(..))
        ));
    }

    #[test]
    fn test_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.svg");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(load_file(&path, LIMIT), Err(IntakeError::Encoding(_))));
    }
}
