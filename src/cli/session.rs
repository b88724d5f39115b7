//! `session` command: a line-oriented interactive studio.
//!
//! ```text
//! sprite> load https://example.com/icons.svg
//! sprite> toggle
//! sprite> list
//! sprite> metrics export timings.json
//! sprite> quit
//! ```

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use super::common::{flush_notices, load_source};
use super::list::write_list;
use crate::config::{cfg, reload_config};
use crate::intake::Source;
use crate::log;
use crate::perf::dashboard;
use crate::store::ViewMode;
use crate::studio::Studio;

const PROMPT: &str = "sprite> ";

const HELP: &str = "\
commands:
  load <path|url>        load a sprite file or URL
  demo                   load the bundled demo sprite
  toggle                 switch between actual and fixed size
  mode <fixed|actual>    set the view mode
  list                   list loaded icons
  clear                  remove all icons
  metrics                show the performance dashboard
  metrics <name>         samples and average for one operation
  metrics export [file]  write samples as JSON
  metrics clear          drop recorded samples
  reload                 re-read the config file
  help                   show this help
  quit                   leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Empty,
    Load(String),
    Demo,
    Toggle,
    Mode(ViewMode),
    List,
    Clear,
    Metrics,
    MetricsFor(String),
    MetricsExport(Option<PathBuf>),
    MetricsClear,
    Reload,
    Help,
    Quit,
}

/// Parse an input line. `Err` carries a message for the user.
pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest) {
        ("", _) => SessionCommand::Empty,
        ("load" | "open", "") => return Err("usage: load <path|url>".into()),
        ("load" | "open", source) => SessionCommand::Load(source.to_string()),
        ("demo", "") => SessionCommand::Demo,
        ("toggle" | "t", "") => SessionCommand::Toggle,
        ("mode", mode) => SessionCommand::Mode(
            mode.parse()
                .map_err(|_| format!("unknown mode `{mode}`, expected fixed or actual"))?,
        ),
        ("list" | "ls", "") => SessionCommand::List,
        ("clear", "") => SessionCommand::Clear,
        ("metrics", "") => SessionCommand::Metrics,
        ("metrics", "clear") => SessionCommand::MetricsClear,
        ("metrics", args) => match args.split_once(char::is_whitespace) {
            Some(("export", file)) => SessionCommand::MetricsExport(Some(PathBuf::from(file.trim()))),
            None if args == "export" => SessionCommand::MetricsExport(None),
            None => SessionCommand::MetricsFor(args.to_string()),
            _ => return Err(format!("unknown metrics command `{args}`")),
        },
        ("reload", "") => SessionCommand::Reload,
        ("help" | "?", _) => SessionCommand::Help,
        ("quit" | "exit" | "q", "") => SessionCommand::Quit,
        (other, _) => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(command)
}

/// Run the session on stdin/stdout.
pub fn run(studio: &mut Studio, initial: Option<&str>) -> Result<()> {
    // failures are reported by the studio itself
    match initial {
        Some(source) => {
            load_source(studio, &Source::parse(source)).ok();
        }
        None if studio.config().features.demo_sprite => {
            studio.load_demo().ok();
        }
        None => {}
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    run_with(studio, stdin.lock(), &mut io::stdout(), interactive)
}

/// Drive a session from any line source.
pub fn run_with(
    studio: &mut Studio,
    input: impl BufRead,
    out: &mut impl Write,
    prompt: bool,
) -> Result<()> {
    flush_notices(studio);
    if prompt {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => execute(studio, command, out)?,
            Err(message) => writeln!(out, "{message}")?,
        }
        flush_notices(studio);
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
    }
    Ok(())
}

fn execute(studio: &mut Studio, command: SessionCommand, out: &mut impl Write) -> Result<()> {
    match command {
        SessionCommand::Empty | SessionCommand::Quit => {}
        // load failures are reported by the studio itself
        SessionCommand::Load(source) => {
            load_source(studio, &Source::parse(&source)).ok();
        }
        SessionCommand::Demo => {
            studio.load_demo().ok();
        }
        SessionCommand::Toggle => {
            studio.toggle_view_mode();
        }
        SessionCommand::Mode(mode) => studio.set_view_mode(mode),
        SessionCommand::List => {
            if studio.icons().is_empty() {
                writeln!(out, "no icons loaded")?;
            } else {
                if let Some(source) = studio.source() {
                    writeln!(out, "{source}")?;
                }
                let fixed_size = studio.config().ui.fixed_size;
                write_list(out, studio.icons(), studio.view_mode(), fixed_size, false)?;
            }
        }
        SessionCommand::Clear => studio.clear(),
        SessionCommand::Metrics => {
            if studio.perf().is_enabled() {
                write!(out, "{}", dashboard::render(&studio.perf().metrics()))?;
            } else {
                writeln!(
                    out,
                    "performance metrics are off (run with -M or set `[dev] performance_metrics`)"
                )?;
            }
        }
        SessionCommand::MetricsFor(name) => {
            let perf = studio.perf();
            let samples = perf.metrics_by_name(&name);
            write!(out, "{}", dashboard::render_operation(&name, &samples, perf.average(&name)))?;
        }
        SessionCommand::MetricsExport(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(dashboard::default_export_name(now_millis())));
            match dashboard::export_to(&studio.perf().metrics(), &path) {
                Ok(()) => writeln!(out, "wrote {}", path.display())?,
                Err(e) => log!("error"; "{:#}", e),
            }
        }
        SessionCommand::MetricsClear => {
            studio.perf_mut().clear();
            writeln!(out, "metrics cleared")?;
        }
        SessionCommand::Reload => match reload_config() {
            Ok(true) => {
                studio.set_config(cfg());
                writeln!(out, "config reloaded")?;
            }
            Ok(false) => writeln!(out, "config unchanged")?,
            Err(e) => log!("config"; "reload failed: {:#}", e),
        },
        SessionCommand::Help => writeln!(out, "{HELP}")?,
    }
    Ok(())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
