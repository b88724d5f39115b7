//! `[ui]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [ui]
//! max_file_size = 10485760      # bytes; larger sprite files are rejected
//! max_icons_display = 1000      # grid output stops after this many icons
//! default_view_mode = "actual"  # "actual" or "fixed"
//! fixed_size = 36               # edge length in px for fixed mode
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::store::ViewMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub max_file_size: u64,
    pub max_icons_display: usize,
    pub default_view_mode: ViewMode,
    pub fixed_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            max_icons_display: 1000,
            default_view_mode: ViewMode::Actual,
            fixed_size: 36,
        }
    }
}

impl UiConfig {
    pub const MAX_FILE_SIZE: FieldPath = FieldPath::new("ui.max_file_size");
    pub const MAX_ICONS_DISPLAY: FieldPath = FieldPath::new("ui.max_icons_display");
    pub const FIXED_SIZE: FieldPath = FieldPath::new("ui.fixed_size");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_file_size == 0 {
            diag.error(Self::MAX_FILE_SIZE, "must be greater than 0");
        }
        if self.max_icons_display == 0 {
            diag.error(Self::MAX_ICONS_DISPLAY, "must be greater than 0");
        }
        if self.fixed_size == 0 {
            diag.error_with_hint(Self::FIXED_SIZE, "must be greater than 0", "default is 36");
        }
    }
}
