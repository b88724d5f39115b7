//! Configuration management for `spritestudio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [api], [ui], [features], [dev]
//! ├── types/         # ConfigError, FieldPath, global handle
//! ├── util.rs        # config file lookup
//! └── mod.rs         # StudioConfig (this file)
//! ```
//!
//! The config file is optional. When none is found upward from the working
//! directory, every section uses its defaults.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ApiConfig, DevConfig, FeaturesConfig, UiConfig};
#[cfg(test)]
pub use section::DEFAULT_CORS_PROXY;
pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::{cli::Cli, debug, log, utils::plural_s};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config file name.
pub const CONFIG_FILE: &str = "spritestudio.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `spritestudio.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Config file the values came from, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub dev: DevConfig,
}

impl StudioConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; falls back to defaults
    /// when there is none.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.cli = Some(cli);
        config.apply_cli_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, warning once about any keys the sections do not know.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (config, unknown) = Self::parse_lenient(&content)?;
        if !unknown.is_empty() {
            let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
            log!(
                "warning";
                "{name}: ignoring unknown key{} {}",
                plural_s(unknown.len()),
                unknown.join(", ")
            );
        }
        Ok(config)
    }

    /// Deserialize through `serde_ignored`, returning the skipped key paths.
    fn parse_lenient(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut unknown = Vec::new();
        let config = serde_ignored::deserialize(toml::Deserializer::new(content), |key| {
            unknown.push(key.to_string());
        })?;
        Ok((config, unknown))
    }

    /// Apply global CLI flags on top of file values.
    pub(crate) fn apply_cli_overrides(&mut self) {
        let Some(cli) = self.cli else { return };
        if cli.metrics {
            self.dev.performance_metrics = true;
        }
        if cli.announce {
            self.features.announcements = true;
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.api.validate(&mut diag);
        self.ui.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Parse a TOML document; unknown keys are tolerated.
impl FromStr for StudioConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(content).map(|(config, _)| config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a test fixture; unknown keys fail the test since they are typos.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> StudioConfig {
    let (config, unknown) = StudioConfig::parse_lenient(content).unwrap();
    assert_eq!(unknown, Vec::<String>::new(), "typo in test config");
    config
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_toml() {
        assert!("[ui\nfixed_size = 3".parse::<StudioConfig>().is_err());
        assert_eq!("[ui]\nfixed_size = 3".parse::<StudioConfig>().unwrap().ui.fixed_size, 3);
    }

    #[test]
    fn test_default_is_valid() {
        let config = StudioConfig::default();
        assert!(config.cli.is_none());
        assert!(config.config_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let config = test_parse_config("[api]\ncors_proxy = \"nope\"\n[ui]\nfixed_size = 0");
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[ui]\nfixed_size = 20\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = StudioConfig::parse_lenient(content).unwrap();
        assert_eq!(config.ui.fixed_size, 20);
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = StudioConfig::parse_lenient("[dev]\nconsole_logging = true").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[ui]\nmax_icons_display = 5").unwrap();
        let config = StudioConfig::from_path(&path).unwrap();
        assert_eq!(config.ui.max_icons_display, 5);

        assert!(StudioConfig::from_path(&dir.path().join("missing.toml")).is_err());
    }
}
