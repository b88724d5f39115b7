//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement, so an
//! interactive session can pick up edits to `spritestudio.toml` with `reload`.

use crate::config::StudioConfig;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<StudioConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(StudioConfig::default()));

/// Hash of the config file content currently loaded (0 = none).
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<StudioConfig> {
    CONFIG.load_full()
}

fn content_hash(content: &str) -> u64 {
    let mut hasher = FxHasher::default();
    content.hash(&mut hasher);
    hasher.finish()
}

/// Reload config from disk if its content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged or if
/// the session runs on defaults.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let Some(path) = current.config_path.clone() else {
        return Ok(false);
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let new_hash = content_hash(&content);
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let mut fresh: StudioConfig = content.parse()?;
    fresh.config_path = Some(path);
    fresh.cli = current.cli;
    fresh.apply_cli_overrides();
    fresh.validate()?;

    CONFIG.store(Arc::new(fresh));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);
    Ok(true)
}

#[inline]
pub fn init_config(config: StudioConfig) -> Arc<StudioConfig> {
    if let Some(path) = &config.config_path
        && let Ok(content) = std::fs::read_to_string(path)
    {
        CONFIG_HASH.store(content_hash(&content), Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cli::Cli;
    use clap::Parser;
    use std::fs;

    // the only test touching the global handle
    #[test]
    fn test_reload_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spritestudio.toml");
        fs::write(&path, "[ui]\nfixed_size = 20").unwrap();

        let cli: &'static Cli =
            Box::leak(Box::new(Cli::parse_from(["sprite-studio", "-M", "session"])));
        let mut config: StudioConfig = fs::read_to_string(&path).unwrap().parse().unwrap();
        config.config_path = Some(path.clone());
        config.cli = Some(cli);
        config.apply_cli_overrides();
        init_config(config);

        assert!(!reload_config().unwrap());

        fs::write(&path, "[ui]\nfixed_size = 48").unwrap();
        assert!(reload_config().unwrap());
        assert_eq!(cfg().ui.fixed_size, 48);
        assert!(cfg().dev.performance_metrics);
        assert!(!reload_config().unwrap());

        fs::write(&path, "[ui]\nfixed_size = 0").unwrap();
        assert!(reload_config().is_err());
        assert_eq!(cfg().ui.fixed_size, 48);

        init_config(StudioConfig::default());
        assert!(!reload_config().unwrap());
    }

    #[test]
    fn test_content_hash_stable() {
        assert_eq!(content_hash("[ui]"), content_hash("[ui]"));
        assert_ne!(content_hash("[ui]"), content_hash("[api]"));
    }
}
