//! `[features]` and `[dev]` sections.
//!
//! ```toml
//! [features]
//! demo_sprite = true            # session starts with the bundled demo sprite
//! error_logging = true          # log the full cause chain of load failures
//! announcements = false         # print screen-reader phrasings of each notice
//!
//! [dev]
//! performance_metrics = false   # record timings and show the metrics dashboard
//! console_logging = false       # log every recorded timing as it happens
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub demo_sprite: bool,
    pub error_logging: bool,
    pub announcements: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            demo_sprite: true,
            error_logging: true,
            announcements: false,
        }
    }
}

/// Development-only instrumentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    pub performance_metrics: bool,
    pub console_logging: bool,
}
