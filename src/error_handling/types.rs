//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for a single location lookup tier.
///
/// These never escape the location resolver boundary: each tier failure is
/// logged and the resolver falls through to the next tier, ending in a
/// synthetic placeholder result.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request itself failed (connect, timeout, body read).
    #[error("lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("lookup endpoint returned HTTP {0}")]
    Status(u16),

    /// The response body was not the JSON shape the tier expects.
    #[error("lookup response was malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response parsed but is missing the identity field.
    #[error("lookup response is missing the network address")]
    MissingAddress,
}
