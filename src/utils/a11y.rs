//! Accessibility announcements.
//!
//! Screen-reader style phrasings attached to studio notices. They are
//! printed under an `[a11y]` prefix when `[features] announcements` (or
//! `--announce`) is on.

use crate::store::ViewMode;

pub const DEMO_SPRITE_LOADED: &str = "Demonstration sprite loaded for testing.";
pub const LOADING_STARTED: &str = "Loading sprite, please wait...";
pub const LOADING_COMPLETED: &str = "Sprite loading completed.";

pub fn file_uploaded(filename: &str, count: usize) -> String {
    format!("File {filename} uploaded successfully. Found {count} icons.")
}

pub fn url_loaded(count: usize) -> String {
    format!("Sprite loaded from URL successfully. Found {count} icons.")
}

pub fn view_mode_changed(mode: ViewMode) -> String {
    let name = match mode {
        ViewMode::Fixed => "fixed size",
        ViewMode::Actual => "actual size",
    };
    format!("View mode changed to {name}.")
}

pub fn error_occurred(error: &str) -> String {
    format!("Error occurred: {error}")
}
