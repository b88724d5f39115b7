//! Named timing samples.
//!
//! `mark_start`/`mark_end` pairs measure a span by name; `add_metric` records
//! any value directly. Only the newest [`MAX_METRICS`] samples are kept.
//! A disabled monitor records nothing and every timing reads as `0.0`.

use std::collections::{BTreeMap, VecDeque};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;

use crate::log;

/// Sample retention limit.
pub const MAX_METRICS: usize = 100;

/// Free-form key/value data attached to a sample.
pub type Metadata = BTreeMap<String, Value>;

/// One recorded measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    /// Milliseconds.
    pub value: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

/// Build [`Metadata`] from pairs.
///
/// ```ignore
/// metadata([("fileSize", json!(1024)), ("iconCount", json!(6))])
/// ```
pub fn metadata<K, const N: usize>(pairs: [(K, Value); N]) -> Metadata
where
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    enabled: bool,
    console_logging: bool,
    starts: FxHashMap<String, Instant>,
    metrics: VecDeque<Metric>,
}

impl PerformanceMonitor {
    pub fn new(enabled: bool, console_logging: bool) -> Self {
        Self {
            enabled,
            console_logging,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Change flags in place, keeping recorded samples.
    pub fn configure(&mut self, enabled: bool, console_logging: bool) {
        self.enabled = enabled;
        self.console_logging = console_logging;
        if !enabled {
            self.starts.clear();
        }
    }

    pub fn mark_start(&mut self, name: &str) {
        if self.enabled {
            self.starts.insert(name.to_string(), Instant::now());
        }
    }

    /// Close the span opened by `mark_start(name)` and record it.
    ///
    /// Returns the duration in milliseconds, or `0.0` if disabled or no span
    /// is open under `name`.
    pub fn mark_end(&mut self, name: &str, metadata: Metadata) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        let Some(start) = self.starts.remove(name) else {
            return 0.0;
        };

        let duration = start.elapsed().as_secs_f64() * 1000.0;
        self.add_metric(name, duration, metadata);
        duration
    }

    pub fn add_metric(&mut self, name: &str, value: f64, metadata: Metadata) {
        if !self.enabled {
            return;
        }

        let metric = Metric {
            name: name.to_string(),
            value,
            timestamp: now_millis(),
            metadata,
        };
        if self.console_logging {
            log!("perf"; "{}: {:.2}ms {}", metric.name, metric.value, format_metadata(&metric.metadata));
        }

        self.metrics.push_back(metric);
        while self.metrics.len() > MAX_METRICS {
            self.metrics.pop_front();
        }
    }

    /// Time `f` under `name`.
    pub fn measure<T>(&mut self, name: &str, metadata: Metadata, f: impl FnOnce() -> T) -> T {
        self.mark_start(name);
        let result = f();
        self.mark_end(name, metadata);
        result
    }

    /// All retained samples, oldest first.
    pub fn metrics(&self) -> Vec<Metric> {
        self.metrics.iter().cloned().collect()
    }

    pub fn metrics_by_name(&self, name: &str) -> Vec<Metric> {
        self.metrics
            .iter()
            .filter(|m| m.name == name)
            .cloned()
            .collect()
    }

    /// Mean of samples named `name`, `0.0` if there are none.
    pub fn average(&self, name: &str) -> f64 {
        mean(self.metrics.iter().filter(|m| m.name == name))
    }

    pub fn clear(&mut self) {
        self.metrics.clear();
        self.starts.clear();
    }
}

pub(super) fn mean<'a>(metrics: impl Iterator<Item = &'a Metric>) -> f64 {
    let (sum, count) = metrics.fold((0.0, 0usize), |(s, c), m| (s + m.value, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn format_metadata(metadata: &Metadata) -> String {
    if metadata.is_empty() {
        String::new()
    } else {
        serde_json::to_string(metadata).unwrap_or_default()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
