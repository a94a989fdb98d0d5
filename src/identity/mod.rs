//! Page identity resolution
//!
//! Turns a classified URL into the page title and language edition it refers
//! to. Only revision-id URLs need a network round trip; every other shape is
//! resolved from the URL text alone.

use crate::api::RevisionClient;
use crate::url::{decode_title, from_db_key, language_code_for_host, PageUrlShape};
use crate::ResolutionError;
use std::fmt;
use url::Url;

/// The resolved identity of a target page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageReference {
    /// Display title (spaces, decoded)
    pub title: String,
    /// Language edition, e.g. `en`
    pub language_code: String,
}

impl fmt::Display for PageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.language_code, self.title)
    }
}

/// Resolves the page a classified URL refers to
///
/// # Arguments
///
/// * `client` - API client, used only for [`PageUrlShape::QueryOldId`]
/// * `url` - The URL that was classified
/// * `shape` - Result of classifying `url`
///
/// # Returns
///
/// * `Ok(PageReference)` - Title and language of the page
/// * `Err(ResolutionError)` - The URL is not an article, or the revision
///   lookup failed or returned no page
pub async fn resolve(
    client: &RevisionClient,
    url: &str,
    shape: &PageUrlShape,
) -> Result<PageReference, ResolutionError> {
    let language_code = language_of(url, &client.site().domain)?;

    let title = match shape {
        PageUrlShape::PathTitle(raw) => decode_title(raw),
        PageUrlShape::QueryTitle(name) => from_db_key(name),
        PageUrlShape::QueryOldId(revision_id) => {
            tracing::debug!(revision_id, "resolving title from revision id");
            client
                .page_title_for_revision(&language_code, *revision_id)
                .await?
        }
        PageUrlShape::NotAPage => {
            return Err(ResolutionError::NotAPage {
                url: url.to_string(),
            })
        }
    };

    if title.trim().is_empty() {
        return Err(ResolutionError::InvalidUrl {
            url: url.to_string(),
            reason: "empty page title".to_string(),
        });
    }

    Ok(PageReference {
        title,
        language_code,
    })
}

fn language_of(url: &str, domain: &str) -> Result<String, ResolutionError> {
    let parsed = Url::parse(url.trim()).map_err(|e| ResolutionError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    parsed
        .host_str()
        .and_then(|host| language_code_for_host(host, domain))
        .ok_or_else(|| ResolutionError::InvalidUrl {
            url: url.to_string(),
            reason: format!("host is not a language edition of {}", domain),
        })
}
