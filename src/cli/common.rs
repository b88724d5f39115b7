//! Common utilities shared across CLI commands.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::config::StudioConfig;
use crate::log;
use crate::intake::{IntakeError, Source};
use crate::perf::dashboard;
use crate::store::ViewMode;
use crate::studio::{LoadError, Studio};

/// Studio for a one-shot command, with `source` loaded and `mode` applied.
pub fn open(config: &Arc<StudioConfig>, source: &str, mode: Option<ViewMode>) -> Result<Studio> {
    let mut studio = Studio::from_config(Arc::clone(config)).with_echo(true);
    let loaded = load_source(&mut studio, &Source::parse(source));
    if loaded.is_ok()
        && let Some(mode) = mode
        && mode != studio.view_mode()
    {
        studio.set_view_mode(mode);
    }
    flush_notices(&mut studio);
    // the studio has already printed why
    loaded.map_err(|_| anyhow!("could not load `{source}`"))?;
    Ok(studio)
}

/// Drain the studio's notices, logging their announcements when
/// `[features] announcements` is on. Returns the announcements logged.
pub fn flush_notices(studio: &mut Studio) -> Vec<String> {
    if !studio.config().features.announcements {
        studio.take_notices();
        return Vec::new();
    }
    let announced: Vec<String> = studio
        .take_notices()
        .into_iter()
        .filter_map(|notice| notice.announcement)
        .collect();
    for text in &announced {
        log!("a11y"; "{}", text);
    }
    announced
}

/// Load a file, URL or stdin; the studio reports any failure itself.
pub fn load_source(studio: &mut Studio, source: &Source) -> Result<usize, LoadError> {
    match source {
        Source::Url(url) => studio.load_url(url),
        Source::File(path) => studio.load_file(path),
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| IntakeError::Io(PathBuf::from("<stdin>"), e))?;
            studio.load_text("stdin", &text)
        }
    }
}

/// Print the metrics dashboard when instrumentation is on.
pub fn print_dashboard(studio: &Studio) {
    if studio.perf().is_enabled() {
        eprintln!();
        eprint!("{}", dashboard::render(&studio.perf().metrics()));
    }
}

/// `W×H` for display, `?` when the viewBox is not four numbers.
pub fn format_size(size: Option<(f64, f64)>) -> String {
    match size {
        Some((w, h)) => format!("{}×{}", trim_float(w), trim_float(h)),
        None => "?".to_string(),
    }
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(Some((24.0, 24.0))), "24×24");
        assert_eq!(format_size(Some((64.0, 16.5))), "64×16.5");
        assert_eq!(format_size(None), "?");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.svg");
        let config = Arc::new(StudioConfig::default());
        assert!(open(&config, &missing.to_string_lossy(), None).is_err());
    }

    #[test]
    fn test_flush_notices() {
        use crate::intake::http::fake::FakeClient;
        use crate::utils::a11y;

        let config = crate::config::test_parse_config("[features]\nannouncements = true");
        let mut studio = Studio::new(Arc::new(config), Box::new(FakeClient::new()));
        studio.load_demo().unwrap();
        studio.toggle_view_mode();
        assert_eq!(
            flush_notices(&mut studio),
            [a11y::DEMO_SPRITE_LOADED, "View mode changed to fixed size."]
        );
        assert!(studio.take_notices().is_empty());

        let mut quiet = Studio::new(Arc::new(StudioConfig::default()), Box::new(FakeClient::new()));
        quiet.load_demo().unwrap();
        assert!(flush_notices(&mut quiet).is_empty());
        assert!(quiet.take_notices().is_empty());
    }

    #[test]
    fn test_open_applies_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.svg");
        std::fs::write(&path, r#"<svg><symbol id="a"/></svg>"#).unwrap();
        let config = Arc::new(StudioConfig::default());
        let studio = open(&config, &path.to_string_lossy(), Some(ViewMode::Fixed)).unwrap();
        assert_eq!(studio.view_mode(), ViewMode::Fixed);
        assert_eq!(studio.icons().len(), 1);
    }
}
