use crate::LookupError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A revision returned by a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionPointer {
    /// Revision id assigned by the wiki
    pub revision_id: u64,
    /// When the revision was saved
    pub timestamp: DateTime<Utc>,
}

impl RevisionPointer {
    /// Calendar date (UTC) on which the revision was saved
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub(crate) fn from_item(item: &RevisionItem) -> Result<Self, LookupError> {
        let timestamp = DateTime::parse_from_rfc3339(&item.timestamp)
            .map_err(|source| LookupError::Timestamp {
                value: item.timestamp.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Self {
            revision_id: item.revid,
            timestamp,
        })
    }
}

// prop=revisions, formatversion=2

#[derive(Debug, Deserialize)]
pub(crate) struct RevisionsResponse {
    pub query: Option<RevisionsQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RevisionsQuery {
    #[serde(default)]
    pub pages: Vec<RevisionsPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RevisionsPage {
    #[serde(default)]
    pub revisions: Vec<RevisionItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RevisionItem {
    pub revid: u64,
    pub timestamp: String,
}

impl RevisionsResponse {
    pub fn first_revision(&self) -> Option<&RevisionItem> {
        self.query
            .as_ref()?
            .pages
            .first()?
            .revisions
            .first()
    }
}

// prop=info, formatversion=1: pages are keyed by page id

#[derive(Debug, Deserialize)]
pub(crate) struct InfoResponse {
    pub query: Option<InfoQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfoQuery {
    #[serde(default)]
    pub pages: BTreeMap<String, InfoPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfoPage {
    pub title: Option<String>,
}

impl InfoResponse {
    pub fn page_title(&self) -> Option<&str> {
        self.query
            .as_ref()?
            .pages
            .values()
            .find_map(|page| page.title.as_deref())
            .filter(|title| !title.is_empty())
    }
}
