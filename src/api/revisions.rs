use crate::api::client::RevisionClient;
use crate::api::types::{InfoResponse, RevisionPointer, RevisionsResponse};
use crate::identity::PageReference;
use crate::url::to_db_key;
use crate::{LookupError, ResolutionError};
use chrono::NaiveDate;

/// Direction parameter asking for the oldest revision first
const OLDEST_FIRST: &str = "newer";

impl RevisionClient {
    /// Looks up the title of the page a revision belongs to
    ///
    /// The returned title is already in display form (spaces).
    pub async fn page_title_for_revision(
        &self,
        language_code: &str,
        revision_id: u64,
    ) -> Result<String, ResolutionError> {
        let params = [
            ("action", "query".to_string()),
            ("prop", "info".to_string()),
            ("format", "json".to_string()),
            ("origin", "*".to_string()),
            ("revids", revision_id.to_string()),
        ];

        let response: InfoResponse = self.get_json(language_code, &params).await?;

        response
            .page_title()
            .map(str::to_string)
            .ok_or(ResolutionError::MissingPage { revision_id })
    }

    /// Fetches the earliest revision of a page
    pub async fn first_revision(&self, page: &PageReference) -> Result<RevisionPointer, LookupError> {
        let mut params = revision_params(&page.title);
        params.push(("rvdir", OLDEST_FIRST.to_string()));

        let revision = self.single_revision(page, &params).await?;
        tracing::debug!(
            title = %page.title,
            revision_id = revision.revision_id,
            "first revision found"
        );
        Ok(revision)
    }

    /// Fetches the latest revision saved at or before the end of `date` (UTC)
    pub async fn revision_as_of(
        &self,
        page: &PageReference,
        date: NaiveDate,
    ) -> Result<RevisionPointer, LookupError> {
        let mut params = revision_params(&page.title);
        params.push(("rvstart", end_of_day(date)));

        let revision = self.single_revision(page, &params).await?;
        tracing::debug!(
            title = %page.title,
            %date,
            revision_id = revision.revision_id,
            "revision as of date found"
        );
        Ok(revision)
    }

    async fn single_revision(
        &self,
        page: &PageReference,
        params: &[(&'static str, String)],
    ) -> Result<RevisionPointer, LookupError> {
        let response: RevisionsResponse = self.get_json(&page.language_code, params).await?;

        let item = response
            .first_revision()
            .ok_or_else(|| LookupError::MissingRevision {
                title: page.title.clone(),
            })?;

        RevisionPointer::from_item(item)
    }
}

/// Parameters shared by both revision queries
fn revision_params(title: &str) -> Vec<(&'static str, String)> {
    vec![
        ("action", "query".to_string()),
        ("format", "json".to_string()),
        ("prop", "revisions".to_string()),
        ("formatversion", "2".to_string()),
        ("rvlimit", "1".to_string()),
        ("rvprop", "timestamp|ids".to_string()),
        ("origin", "*".to_string()),
        ("titles", to_db_key(title)),
    ]
}

/// Last representable instant of `date` in the API's timestamp format
fn end_of_day(date: NaiveDate) -> String {
    format!("{}T23:59:59.999Z", date.format("%Y-%m-%d"))
}
