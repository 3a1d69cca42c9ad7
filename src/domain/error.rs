//! Error types for the search screen's ambient I/O.
//!
//! The store, controller and interactor never fail: every gesture runs to
//! completion and collaborator failures belong to the collaborator. The
//! [`SearchScreenError`] type only covers the surrounding plumbing, i.e.
//! configuration loading, settings persistence, the metrics file sink and the
//! trace exporter.

use thiserror::Error;

/// The main error type for search screen plumbing.
///
/// Most variants carry a human-readable description; I/O failures are wrapped
/// through `#[from]` so `?` works directly on `std::fs` calls.
#[derive(Debug, Error)]
pub enum SearchScreenError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing persisted settings failed.
    ///
    /// Raised when the settings file exists but cannot be parsed, or when the
    /// in-memory settings cannot be serialized back to disk.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A metric event could not be encoded or written to its sink.
    #[error("Metrics error: {0}")]
    Metrics(String),
}

/// A specialized `Result` type for search screen plumbing.
pub type Result<T> = std::result::Result<T, SearchScreenError>;
