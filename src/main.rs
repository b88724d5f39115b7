//! Sprite Studio - inspect SVG sprite sheets from files or URLs.

mod cli;
mod config;
mod intake;
mod logger;
mod perf;
mod sprite;
mod store;
mod studio;
mod utils;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use serde_json::json;
use cli::{Cli, Commands, SourceArgs};
use config::{StudioConfig, init_config};
use studio::Studio;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(StudioConfig::load(cli)?);
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }

    match &cli.command {
        Commands::List {
            source,
            json,
            details,
        } => run_list(&config, source, *json, *details),
        Commands::Grid { source, columns } => run_grid(&config, source, *columns),
        Commands::Export {
            source,
            output,
            optimize,
            sanitize,
        } => run_export(&config, source, output, *optimize, *sanitize),
        Commands::Session { source } => {
            let mut studio = Studio::from_config(Arc::clone(&config)).with_echo(true);
            cli::session::run(&mut studio, source.as_deref())
        }
    }
}

// =============================================================================
// One-shot Commands
// =============================================================================

fn run_list(config: &Arc<StudioConfig>, args: &SourceArgs, json: bool, details: bool) -> Result<()> {
    let studio = cli::common::open(config, &args.source, args.mode)?;
    let mut stdout = io::stdout().lock();

    if json {
        cli::list::write_json(&mut stdout, studio.icons())?;
    } else {
        cli::list::write_list(
            &mut stdout,
            studio.icons(),
            studio.view_mode(),
            config.ui.fixed_size,
            details,
        )?;
    }
    stdout.flush()?;
    cli::common::print_dashboard(&studio);
    Ok(())
}

fn run_grid(config: &Arc<StudioConfig>, args: &SourceArgs, columns: Option<usize>) -> Result<()> {
    let studio = cli::common::open(config, &args.source, args.mode)?;
    let icons = studio.icons();

    let columns = columns.unwrap_or_else(|| {
        let cell = icons.iter().map(|i| i.id.chars().count()).max().unwrap_or(0);
        cli::grid::fit_columns(cell)
    });
    let mut stdout = io::stdout().lock();
    cli::grid::write_grid(&mut stdout, icons, columns, config.ui.max_icons_display)?;
    stdout.flush()?;
    cli::common::print_dashboard(&studio);
    Ok(())
}

fn run_export(
    config: &Arc<StudioConfig>,
    args: &SourceArgs,
    output: &Path,
    optimize: bool,
    sanitize: bool,
) -> Result<()> {
    if output.is_file() {
        bail!("output path `{}` is a file", output.display());
    }

    let mut studio = cli::common::open(config, &args.source, args.mode)?;
    let options = cli::export::ExportOptions {
        mode: studio.view_mode(),
        fixed_size: config.ui.fixed_size,
        optimize,
        sanitize,
    };
    let icons = studio.icons().to_vec();
    let written = studio.perf_mut().measure(
        "icon-export",
        perf::metadata([("iconCount", json!(icons.len())), ("optimize", json!(optimize))]),
        || cli::export::export_icons(&icons, output, &options),
    )?;

    logger::status_success(&format!(
        "exported {} to {}",
        utils::plural_count(written.len(), "icon"),
        output.display()
    ));
    cli::common::print_dashboard(&studio);
    Ok(())
}
