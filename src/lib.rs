//! Wiki Time Travel: open an encyclopedia article as it stood on a chosen day
//!
//! This crate classifies article URLs, resolves the page they point at, and
//! queries the MediaWiki revision API for the revision that was current at the
//! end of a given calendar date.

pub mod api;
pub mod config;
pub mod dates;
pub mod identity;
pub mod session;
pub mod url;

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for Wiki Time Travel operations
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("Could not resolve page: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Revision lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Date {selected} is outside the valid range {min} to {max}")]
    InvalidDateSelection {
        selected: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error("No date selected")]
    NoDateSelected,

    #[error("Session has no page loaded")]
    NotReady,
}

/// Errors raised while turning a classified URL into a page reference
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("URL does not point at an article: {url}")]
    NotAPage { url: String },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    #[error("MediaWiki API error [{code}]: {info}")]
    Api { code: String, info: String },

    #[error("No page found for revision {revision_id}")]
    MissingPage { revision_id: u64 },
}

/// Errors raised by the revision lookup client
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    #[error("MediaWiki API error [{code}]: {info}")]
    Api { code: String, info: String },

    #[error("No revision found for page '{title}'")]
    MissingRevision { title: String },

    #[error("Invalid revision timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

// Re-export commonly used types
pub use api::{RevisionClient, RevisionPointer};
pub use config::Config;
pub use dates::{is_valid, DateBound};
pub use identity::{resolve, PageReference};
pub use session::{PopupView, Session, SessionState, TabPort};
pub use crate::url::{classify, page_language, PageUrlShape};
