//! Errors that abort a crawl.

use crate::units::QuantityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("cannot normalize keyword {keyword:?} to {unit}: {source}")]
    QuantityParse {
        keyword: String,
        unit: String,
        #[source]
        source: QuantityError,
    },

    #[error("catalog request failed: {message}")]
    Transport { message: String },

    #[error("catalog returned HTTP status {status}")]
    Status { status: u16 },

    #[error("catalog returned code {code}: {message}")]
    Api { code: i64, message: String },

    #[error("malformed catalog response: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to write record: {0}")]
    Write(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrawlError {
    /// Wraps any displayable failure as a transport error.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport { message: err.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
