//! MediaWiki API access
//!
//! This module contains the revision lookup client:
//! - Building an HTTP client with an identifiable user agent
//! - Page-info lookups by revision id (used during identity resolution)
//! - First-revision and as-of-date revision queries
//! - Decoding API responses, including MediaWiki error payloads

mod client;
mod revisions;
mod types;

pub use client::{build_http_client, RevisionClient};
pub use types::RevisionPointer;
