//! Performance instrumentation.

pub mod dashboard;
mod monitor;

pub use monitor::{Metadata, PerformanceMonitor, metadata};
