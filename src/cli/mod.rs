//! Command-line interface module.

mod args;
pub mod common;
pub mod export;
pub mod grid;
pub mod list;
pub mod session;

pub use args::{Cli, Commands, SourceArgs};
