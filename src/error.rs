//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading fixtures/configuration or segmenting a series.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A series operation that needs at least one point got none.
    #[error("series is empty")]
    EmptySeries,

    /// A fixture key is neither an RFC 3339 timestamp nor a `YYYY-MM-DD` date.
    #[error("invalid date key {key:?}")]
    InvalidDate { key: String },

    /// A fixture entry has no record for the requested certificate.
    #[error("no certificate {id:?} recorded on {date}")]
    MissingCertificate { date: String, id: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
