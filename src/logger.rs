//! Logging utilities with colored output and a status line.
//!
//! `log!`/`debug!` print `[module] message` lines; the `status_*` functions
//! print timestamped notices. All of it goes to stderr, leaving stdout to
//! listings and `--json` output.
//!
//! # Example
//!
//! ```ignore
//! log!("config"; "using {}", path.display());
//! status_pending("Loading SVG from URL...");
//! status_success("Successfully loaded 12 icons");
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{IsTerminal, Write, stderr},
    sync::LazyLock,
    sync::atomic::{AtomicBool, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write one prefixed line, replacing any pending status line.
pub fn log(module: &str, message: &str) {
    let mut status = STATUS.lock();
    status.clear_pending();

    let mut err = stderr().lock();
    writeln!(err, "{} {message}", colorize_prefix(module)).ok();
    err.flush().ok();
}

/// `[module]` colored by the area of the tool it comes from.
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "fetch" | "file" => prefix.bright_blue().bold().to_string(),
        "perf" => prefix.bright_magenta().bold().to_string(),
        "store" | "parse" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Status Line
// ============================================================================

/// `HH:MM:SS` (UTC) for a unix timestamp.
fn clock(unix_secs: u64) -> String {
    let day = unix_secs % 86_400;
    format!("{:02}:{:02}:{:02}", day / 3600, day / 60 % 60, day % 60)
}

fn now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    clock(secs)
}

/// Kind of user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

impl StatusKind {
    fn symbol(self) -> String {
        match self {
            Self::Success => "✓".green().to_string(),
            Self::Info => "•".blue().to_string(),
            Self::Error => "✗".red().to_string(),
        }
    }
}

/// Timestamped notices on stderr, plus at most one transient "Loading..."
/// line that the next write overwrites when stderr is a terminal.
#[derive(Debug, Default)]
pub struct StatusLine {
    pending: bool,
}

static STATUS: LazyLock<Mutex<StatusLine>> = LazyLock::new(|| Mutex::new(StatusLine::default()));

impl StatusLine {
    pub fn show(&mut self, kind: StatusKind, message: &str) {
        self.clear_pending();
        let mut err = stderr().lock();
        writeln!(err, "{} {} {message}", format!("[{}]", now()).dimmed(), kind.symbol()).ok();
        err.flush().ok();
    }

    /// Transient line; skipped entirely when stderr is redirected.
    pub fn pending(&mut self, message: &str) {
        self.clear_pending();
        let mut err = stderr().lock();
        if !err.is_terminal() {
            return;
        }
        write!(err, "{}", message.dimmed()).ok();
        err.flush().ok();
        self.pending = true;
    }

    fn clear_pending(&mut self) {
        if std::mem::take(&mut self.pending) {
            let mut err = stderr().lock();
            execute!(err, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
            err.flush().ok();
        }
    }
}

pub fn status_success(message: &str) {
    STATUS.lock().show(StatusKind::Success, message);
}

pub fn status_info(message: &str) {
    STATUS.lock().show(StatusKind::Info, message);
}

pub fn status_error(message: &str) {
    STATUS.lock().show(StatusKind::Error, message);
}

pub fn status_pending(message: &str) {
    STATUS.lock().pending(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_starts_clean() {
        let mut status = StatusLine::default();
        assert!(!status.pending);
        status.clear_pending();
        assert!(!status.pending);
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        assert!(colorize_prefix("fetch").contains("[fetch]"));
        assert!(colorize_prefix("Parse").contains("[Parse]"));
    }

    #[test]
    fn test_clock() {
        assert_eq!(clock(0), "00:00:00");
        assert_eq!(clock(86_400 + 3_723), "01:02:03");
        assert_eq!(now().len(), 8);
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
