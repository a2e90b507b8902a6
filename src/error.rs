//! Error types for github-export
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error variants (Config, ProfileNotFound, Archive, Delivery)
//! - `#[from]` conversions for transport, I/O, and serialization failures
//! - Context information (username, status code, file path)
//!
//! Non-success HTTP statuses on collection endpoints are deliberately NOT
//! errors; they degrade the fetch to a partial result (see
//! [`FetchOutcome`](crate::types::FetchOutcome)). Only transport failures,
//! filesystem failures, a missing profile, and delivery failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for github-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for github-export
///
/// This is the primary error type used throughout the library. Each variant
/// includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "github.api_base")
        key: Option<String>,
    },

    /// Network error (connection failure, timeout, undecodable body)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The profile request returned a non-success status; nothing was exported
    #[error("no profile for {username}: GitHub returned status {status}")]
    ProfileNotFound {
        /// The username whose profile could not be fetched
        username: String,
        /// The HTTP status code the profile endpoint returned
        status: u16,
    },

    /// Archive creation failed
    #[error("archive creation failed for {path}: {reason}")]
    Archive {
        /// The archive file that could not be written
        path: PathBuf,
        /// The reason archiving failed
        reason: String,
    },

    /// Delivery of the archive failed after the export was persisted
    #[error("delivery failed: {reason}")]
    Delivery {
        /// The HTTP status code the delivery endpoint returned, if any
        status: Option<u16>,
        /// The reason delivery failed
        reason: String,
    },
}
