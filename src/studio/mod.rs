//! Action boundary tying intake, parsing, the store and timing together.
//!
//! Every `load_*` call follows the same flow:
//!
//! ```text
//! read / fetch ──► parse ──► non-empty? ──► dispatch LoadIcons ──► success notice
//!      │             │           │
//!      └─────────────┴───────────┴─────────► error notice, store untouched
//! ```

mod notice;

use std::error::Error as _;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

pub use notice::Notice;
#[cfg(test)]
use notice::NoticeLevel;

use crate::config::StudioConfig;
use crate::intake::{self, HttpClient, IntakeError, UreqClient};
use crate::perf::{PerformanceMonitor, metadata};
use crate::sprite::{self, Icon};
use crate::store::{Action, Store, ViewMode};
use crate::utils::{a11y, svg};
use crate::{debug, log};

/// Sprite bundled with the binary.
pub const DEMO_SPRITE: &str = include_str!("../../assets/demo-sprite.svg");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("No icons found in the SVG file. Please ensure it contains <symbol> elements.")]
    NoIcons,

    #[error("the demo sprite is disabled (`[features] demo_sprite = false`)")]
    DemoDisabled,
}

pub struct Studio {
    config: Arc<StudioConfig>,
    store: Store,
    perf: PerformanceMonitor,
    client: Box<dyn HttpClient>,
    notices: Vec<Notice>,
    /// Print notices as they are raised
    echo: bool,
    /// Label of the sprite currently in the store
    source: Option<String>,
}

impl Studio {
    pub fn new(config: Arc<StudioConfig>, client: Box<dyn HttpClient>) -> Self {
        let perf = PerformanceMonitor::new(
            config.dev.performance_metrics,
            config.dev.console_logging,
        );
        Self {
            store: Store::new(config.ui.default_view_mode),
            perf,
            client,
            notices: Vec::new(),
            echo: false,
            source: None,
            config,
        }
    }

    /// Studio backed by the network client configured in `[api]`.
    pub fn from_config(config: Arc<StudioConfig>) -> Self {
        let client = UreqClient::new(config.api.timeout());
        Self::new(config, Box::new(client))
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    // ------------------------------------------------------------------------
    // accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Swap in a reloaded config. Loaded icons and samples are kept.
    pub fn set_config(&mut self, config: Arc<StudioConfig>) {
        self.perf
            .configure(config.dev.performance_metrics, config.dev.console_logging);
        self.config = config;
    }

    pub fn icons(&self) -> &[Icon] {
        self.store.icons()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.store.view_mode()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn perf(&self) -> &PerformanceMonitor {
        &self.perf
    }

    pub fn perf_mut(&mut self) -> &mut PerformanceMonitor {
        &mut self.perf
    }

    /// Drain notices raised since the last call. Callers driving a studio
    /// over many actions drain after each one.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ------------------------------------------------------------------------
    // loading
    // ------------------------------------------------------------------------

    /// Load a sprite from a local file. Returns the icon count.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.progress("Processing file...");

        let result = self.read_file(path, &name).and_then(|content| {
            self.ingest(&content, "file-sprite-parse", json!({ "fileName": name }))
        });
        self.finish(result, &name, |count| {
            Notice::success(format!("Successfully loaded {count} icons from {name}"))
                .announce(a11y::file_uploaded(&name, count))
        })
    }

    /// Load a sprite from an http(s) URL, relaying through `[api] cors_proxy`
    /// when the direct request fails.
    pub fn load_url(&mut self, url: &str) -> Result<usize, LoadError> {
        let url = url.trim();
        self.progress("Fetching SVG from URL...");

        let result = self
            .fetch(url)
            .and_then(|content| self.ingest(&content, "url-sprite-parse", json!({ "url": url })));
        self.finish(result, url, |count| {
            Notice::success(format!("Successfully loaded {count} icons from URL"))
                .announce(a11y::url_loaded(count))
        })
    }

    /// Load sprite markup that is already in memory.
    pub fn load_text(&mut self, label: &str, text: &str) -> Result<usize, LoadError> {
        let result = self.ingest(text, "text-sprite-parse", json!({ "label": label }));
        self.finish(result, label, |count| {
            Notice::success(format!("Successfully loaded {count} icons from {label}"))
                .announce(a11y::LOADING_COMPLETED)
        })
    }

    /// Load the bundled demo sprite.
    pub fn load_demo(&mut self) -> Result<usize, LoadError> {
        let result = if self.config.features.demo_sprite {
            self.ingest(DEMO_SPRITE, "demo-sprite-parse", json!({}))
        } else {
            Err(LoadError::DemoDisabled)
        };
        self.finish(result, "demo sprite", |count| {
            Notice::success(format!("Demo sprite loaded with {count} icons!"))
                .announce(a11y::DEMO_SPRITE_LOADED)
        })
    }

    // ------------------------------------------------------------------------
    // view state
    // ------------------------------------------------------------------------

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.store.dispatch(Action::SetViewMode(mode));
        self.notify(
            Notice::info(format!("View mode changed to {}", mode.label()))
                .announce(a11y::view_mode_changed(mode)),
        );
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        let mode = self.view_mode().toggle();
        self.set_view_mode(mode);
        mode
    }

    pub fn clear(&mut self) {
        self.store.dispatch(Action::ClearIcons);
        self.source = None;
        self.notify(Notice::info("Icons cleared"));
    }

    // ------------------------------------------------------------------------
    // internals
    // ------------------------------------------------------------------------

    fn read_file(&mut self, path: &Path, name: &str) -> Result<String, LoadError> {
        self.perf.mark_start("file-read");
        let content = intake::load_file(path, self.config.ui.max_file_size)?;
        self.perf.mark_end(
            "file-read",
            metadata([("fileName", json!(name)), ("fileSize", json!(content.len()))]),
        );
        Ok(content)
    }

    fn fetch(&mut self, url: &str) -> Result<String, LoadError> {
        if !svg::is_valid_svg_url(url) {
            return Err(IntakeError::InvalidUrl(url.to_string()).into());
        }

        self.perf.mark_start("url-fetch");
        let content = intake::fetch_svg(self.client.as_ref(), url, &self.config.api.cors_proxy)?;
        self.perf.mark_end("url-fetch", metadata([("url", json!(url))]));
        Ok(content)
    }

    /// Parse and, when anything was found, replace the store's icons.
    fn ingest(
        &mut self,
        content: &str,
        metric: &str,
        context: serde_json::Value,
    ) -> Result<usize, LoadError> {
        self.perf.mark_start(metric);
        let icons = sprite::parse_sprite(content);

        let mut meta = match context {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => crate::perf::Metadata::new(),
        };
        meta.insert("iconCount".into(), json!(icons.len()));
        self.perf.mark_end(metric, meta);

        if icons.is_empty() {
            return Err(LoadError::NoIcons);
        }
        let count = icons.len();
        self.store.dispatch(Action::LoadIcons(icons));
        Ok(count)
    }

    fn finish(
        &mut self,
        result: Result<usize, LoadError>,
        label: &str,
        success: impl FnOnce(usize) -> Notice,
    ) -> Result<usize, LoadError> {
        match &result {
            Ok(count) => {
                self.source = Some(label.to_string());
                self.notify(success(*count));
            }
            Err(err) => {
                if self.config.features.error_logging {
                    log!("error"; "loading {} failed: {}", label, error_chain(err));
                }
                self.notify(Notice::error(err.to_string()));
            }
        }
        result
    }

    fn progress(&mut self, message: &str) {
        debug!("studio"; "{}", message);
        self.notify(Notice::pending(message));
    }

    fn notify(&mut self, notice: Notice) {
        if self.echo {
            notice.print();
        }
        self.notices.push(notice);
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn error_chain(err: &LoadError) -> String {
    let mut out = match err {
        LoadError::Intake(IntakeError::FetchFailed { direct, proxy }) => {
            format!("direct request: {direct}; proxy: {proxy}")
        }
        other => other.to_string(),
    };
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
