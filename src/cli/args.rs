//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::store::ViewMode;

/// Inspect SVG sprite sheets from files or URLs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: spritestudio.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Record timings and print the metrics dashboard
    #[arg(short = 'M', long, global = true)]
    pub metrics: bool,

    /// Print screen-reader style announcements with each notice
    #[arg(short = 'a', long, global = true)]
    pub announce: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the icons in a sprite
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Print icons as JSON (id, viewBox, content)
        #[arg(short, long)]
        json: bool,

        /// Show the colors used by each icon
        #[arg(short, long)]
        details: bool,
    },

    /// Print icon ids as a grid
    #[command(visible_alias = "g")]
    Grid {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of columns (default: fit the terminal width)
        #[arg(short, long)]
        columns: Option<usize>,
    },

    /// Write every icon as a standalone SVG file
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: PathBuf,

        /// Normalize each icon through usvg
        #[arg(short = 'O', long)]
        optimize: bool,

        /// Strip scripts, event handlers and javascript: URLs
        #[arg(short, long)]
        sanitize: bool,
    },

    /// Interactive session (load, toggle, list, metrics, ...)
    #[command(visible_alias = "s")]
    Session {
        /// Sprite to load on start (the demo sprite is loaded otherwise)
        source: Option<String>,
    },
}

/// Sprite source shared by one-shot commands.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Sprite file path, http(s) URL, or `-` for stdin
    #[arg(value_name = "SOURCE", value_hint = clap::ValueHint::AnyPath)]
    pub source: String,

    /// View mode (default: `[ui] default_view_mode`)
    #[arg(short, long, value_enum)]
    pub mode: Option<ViewMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["sprite-studio", "-v", "list", "icons.svg", "--mode", "fixed", "--json"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("spritestudio.toml"));
        let Commands::List { source, json, details } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(source.source, "icons.svg");
        assert_eq!(source.mode, Some(ViewMode::Fixed));
        assert!(json);
        assert!(!details);
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from([
            "sprite-studio", "export", "https://x.com/a.svg", "-o", "out", "-O", "--sanitize", "-M",
        ]);
        assert!(cli.metrics);
        let Commands::Export { output, optimize, sanitize, .. } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(output, PathBuf::from("out"));
        assert!(optimize && sanitize);
    }

    #[test]
    fn test_parse_session_optional_source() {
        let cli = Cli::parse_from(["sprite-studio", "session", "--announce"]);
        assert!(cli.announce);
        assert!(matches!(cli.command, Commands::Session { source: None }));
    }
}
