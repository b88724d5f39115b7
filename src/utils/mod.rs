//! Utility modules.

pub mod a11y;
pub mod mime;
pub mod plural;
pub mod svg;

pub use plural::{plural_count, plural_s};
