//! Sprite intake: local files and remote URLs.

mod error;
mod file;
pub mod http;
mod url;

use std::fmt;
use std::path::PathBuf;

pub use error::{IntakeError, status_message};
pub use file::load_file;
pub use http::{HttpClient, UreqClient};
pub use url::fetch_svg;

#[cfg(test)]
pub use error::FETCH_FAILED_MESSAGE;
#[cfg(test)]
pub use url::proxy_url;

/// Where a sprite comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
    /// `-`
    Stdin,
}

impl Source {
    /// `http://` and `https://` arguments are URLs, `-` is stdin, everything
    /// else is a path (with `~` expanded).
    pub fn parse(arg: &str) -> Self {
        let trimmed = arg.trim();
        if trimmed == "-" {
            return Self::Stdin;
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(shellexpand::tilde(trimmed).as_ref()))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}
