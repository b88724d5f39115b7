//! Terminal rendering and export of recorded samples.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;

use super::monitor::{Metadata, Metric, mean};

/// Rows shown in the "recent" table.
const RECENT_LIMIT: usize = 10;

/// Aggregate view over a snapshot of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub average_parse: f64,
    pub average_fetch: f64,
    /// Newest first.
    pub recent: Vec<Metric>,
}

impl Summary {
    pub fn from_metrics(metrics: &[Metric]) -> Self {
        Self {
            total: metrics.len(),
            average_parse: mean(metrics.iter().filter(|m| m.name.contains("parse"))),
            average_fetch: mean(metrics.iter().filter(|m| m.name.contains("fetch"))),
            recent: metrics.iter().rev().take(RECENT_LIMIT).cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceClass {
    Good,
    Ok,
    Slow,
}

impl PerformanceClass {
    pub fn of(ms: f64) -> Self {
        if ms < 50.0 {
            Self::Good
        } else if ms < 200.0 {
            Self::Ok
        } else {
            Self::Slow
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Ok => "ok",
            Self::Slow => "slow",
        }
    }
}

/// `url-fetch` → `Url Fetch`.
pub fn format_metric_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `key: value, key: value` with strings unquoted.
pub fn format_metadata(metadata: &Metadata) -> String {
    metadata
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}: {s}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_clock(timestamp_ms: u64) -> String {
    let secs = timestamp_ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

fn colored_duration(ms: f64) -> String {
    let text = format!("{ms:.2}ms");
    match PerformanceClass::of(ms) {
        PerformanceClass::Good => text.green().to_string(),
        PerformanceClass::Ok => text.yellow().to_string(),
        PerformanceClass::Slow => text.red().to_string(),
    }
}

/// Render the dashboard as terminal text.
pub fn render(metrics: &[Metric]) -> String {
    let summary = Summary::from_metrics(metrics);
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Performance Metrics".bold());
    let _ = writeln!(out, "  Total Measurements: {}", summary.total);
    let _ = writeln!(out, "  Average Parse Time: {:.2}ms", summary.average_parse);
    let _ = writeln!(out, "  Average Fetch Time: {:.2}ms", summary.average_fetch);

    if summary.recent.is_empty() {
        return out;
    }

    let name_width = summary
        .recent
        .iter()
        .map(|m| format_metric_name(&m.name).len())
        .max()
        .unwrap_or(0)
        .max("Operation".len());

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {:<name_width$}  {:>10}  {:<8}  {}",
        "Operation".dimmed(),
        "Duration".dimmed(),
        "Time".dimmed(),
        "Details".dimmed()
    );
    for metric in &summary.recent {
        // pad on the plain text, ANSI codes would skew the width
        let plain_width = format!("{:.2}ms", metric.value).len();
        let duration = format!(
            "{}{}",
            " ".repeat(10usize.saturating_sub(plain_width)),
            colored_duration(metric.value)
        );
        let _ = writeln!(
            out,
            "  {:<name_width$}  {}  {:<8}  {}",
            format_metric_name(&metric.name),
            duration,
            format_clock(metric.timestamp),
            format_metadata(&metric.metadata)
        );
    }
    out
}

/// One operation's samples: count, mean and rating, then each duration.
///
/// ```text
/// Url Fetch: 2 samples, average 130.00ms (ok)
///   01:02:03  60.00ms  url: https://x/a.svg
/// ```
pub fn render_operation(name: &str, samples: &[Metric], average: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {}, average {average:.2}ms ({})",
        format_metric_name(name).bold(),
        crate::utils::plural_count(samples.len(), "sample"),
        PerformanceClass::of(average).as_str()
    );
    for metric in samples {
        let _ = writeln!(
            out,
            "  {}  {}  {}",
            format_clock(metric.timestamp),
            colored_duration(metric.value),
            format_metadata(&metric.metadata)
        );
    }
    out
}

/// Pretty-printed JSON array of samples.
pub fn export_json(metrics: &[Metric]) -> Result<String> {
    serde_json::to_string_pretty(metrics).context("failed to serialize metrics")
}

/// Write [`export_json`] output to `path`.
pub fn export_to(metrics: &[Metric], path: &Path) -> Result<()> {
    let json = export_json(metrics)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// Default export file name, `performance-metrics-<epoch ms>.json`.
pub fn default_export_name(now_ms: u64) -> String {
    format!("performance-metrics-{now_ms}.json")
}
