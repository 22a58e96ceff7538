use std::path::PathBuf;

/// Errors related to configuration loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to reading a transcript file from disk.
///
/// Only the loader produces these. The reducer itself never fails: once a
/// message list exists, every shape of content degrades to a no-op.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Failed to read transcript at {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in transcript {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("Invalid JSON in transcript {path} at line {line}: {message}")]
    InvalidJsonLine {
        path: PathBuf,
        line: usize,
        message: String,
    },
}
