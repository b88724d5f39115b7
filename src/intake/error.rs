//! Intake error types.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when both the direct request and the relay fail.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch SVG from URL. This might be due to CORS restrictions. Try downloading the file and uploading it instead.";

/// Why a sprite could not be read or fetched.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Please upload a valid SVG file (`{name}` looks like {mime})")]
    InvalidFile { name: String, mime: &'static str },

    #[error("`{name}` is {size}, larger than the {limit} limit")]
    TooLarge {
        name: String,
        size: String,
        limit: String,
    },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not UTF-8 text")]
    Encoding(PathBuf),

    #[error("`{0}` is not an http(s) URL ending in .svg")]
    InvalidUrl(String),

    #[error("{0}")]
    Http(String),

    #[error("The fetched content does not appear to be a valid SVG file")]
    NotSvg,

    #[error("relay response is not a valid envelope: {0}")]
    Envelope(String),

    #[error("{FETCH_FAILED_MESSAGE}")]
    FetchFailed { direct: String, proxy: String },
}

/// Friendly text for an HTTP status.
pub fn status_message(status: u16) -> String {
    match status {
        0 => "Network error - please check your connection".to_string(),
        403 => "Access forbidden - CORS or permission issue".to_string(),
        404 => "Resource not found".to_string(),
        500 => "Server error - please try again later".to_string(),
        _ => format!("Server Error: {status}"),
    }
}
