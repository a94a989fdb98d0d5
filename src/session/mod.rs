//! Navigation orchestration for one popup session
//!
//! A [`Session`] runs the whole flow against injected collaborators:
//! 1. Classify the tab's URL; stop with a placeholder if it is not an article
//! 2. Resolve the page identity
//! 3. Fetch the first revision to bound the date picker
//! 4. Gate the action on the selected date
//! 5. Look up the revision as of that date and navigate the tab to it
//!
//! Every network step finishes before the next one starts, and any failure
//! is reported to the view instead of being carried forward.

mod ports;
mod state;

pub use ports::{PopupView, TabPort};
pub use state::SessionState;

use crate::api::RevisionClient;
use crate::dates::{creation_text, is_valid, parse_date_input, DateBound};
use crate::identity::{resolve, PageReference};
use crate::url::{classify_with, PageUrlShape};
use crate::TravelError;
use chrono::NaiveDate;

/// One popup activation
pub struct Session<T: TabPort, V: PopupView> {
    client: RevisionClient,
    tab: T,
    view: V,
    state: SessionState,
    selected: Option<NaiveDate>,
    today: Option<NaiveDate>,
}

impl<T: TabPort, V: PopupView> Session<T, V> {
    /// Creates a fresh, unclassified session
    pub fn new(client: RevisionClient, tab: T, view: V) -> Self {
        Self {
            client,
            tab,
            view,
            state: SessionState::Unclassified,
            selected: None,
            today: None,
        }
    }

    /// Pins the upper date bound instead of reading the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tab(&self) -> &T {
        &self.tab
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Classifies the current URL and, for articles, prepares the date window
    ///
    /// Runs at most once; later calls return the existing state.
    ///
    /// # Returns
    ///
    /// * `Ok(&SessionState)` - `NotAPage` or `Page`
    /// * `Err(TravelError)` - Resolution or the first-revision lookup failed;
    ///   the session is left in `Failed` with the action disabled
    pub async fn load(&mut self) -> Result<&SessionState, TravelError> {
        if self.state != SessionState::Unclassified {
            return Ok(&self.state);
        }

        let url = self.tab.current_url();
        let shape = classify_with(&url, self.client.site());
        tracing::info!(url = %url, shape = shape.label(), "classified current tab");

        if !shape.is_page() {
            self.view.show_not_a_page();
            self.state = SessionState::NotAPage;
            return Ok(&self.state);
        }

        self.view.set_action_enabled(false);

        match self.prepare(&url, &shape).await {
            Ok((page, bound)) => {
                let created = creation_text(bound.min_date());
                self.view.show_page(&page.title, &created, &bound);
                tracing::info!(
                    page = %page,
                    min_date = %bound.min_date(),
                    max_date = %bound.max_date(),
                    "page session ready"
                );
                self.state = SessionState::Page { page, bound };
                Ok(&self.state)
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "failed to prepare page session");
                let message = e.to_string();
                self.view.show_error(&message);
                self.view.set_action_enabled(false);
                self.state = SessionState::Failed { message };
                Err(e)
            }
        }
    }

    async fn prepare(
        &self,
        url: &str,
        shape: &PageUrlShape,
    ) -> Result<(PageReference, DateBound), TravelError> {
        let page = resolve(&self.client, url, shape).await?;
        let first = self.client.first_revision(&page).await?;
        let bound = match self.today {
            Some(today) => DateBound::from_first_revision(&first, today),
            None => DateBound::until_today(&first),
        };
        Ok((page, bound))
    }

    /// Records raw date input and re-evaluates the action control
    ///
    /// Returns whether the action is now enabled.
    pub fn select_date(&mut self, input: &str) -> bool {
        self.select(parse_date_input(input))
    }

    /// Records a date selection and re-evaluates the action control
    pub fn select(&mut self, date: Option<NaiveDate>) -> bool {
        self.selected = date;
        let enabled = self.action_enabled();
        if self.state.accepts_action() {
            self.view.set_action_enabled(enabled);
        }
        enabled
    }

    /// Returns true if the page is loaded and the selected date is in range
    pub fn action_enabled(&self) -> bool {
        self.state
            .page()
            .map(|(_, bound)| is_valid(self.selected, bound.min_date(), bound.max_date()))
            .unwrap_or(false)
    }

    /// Looks up the revision for the selected date and navigates the tab to it
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The URL the tab was sent to
    /// * `Err(TravelError)` - No page is loaded, the selection is missing or
    ///   out of range, or the lookup failed; the tab is not touched
    pub async fn travel(&mut self) -> Result<String, TravelError> {
        let (page, bound) = match self.state.page() {
            Some((page, bound)) => (page.clone(), *bound),
            None => return Err(TravelError::NotReady),
        };

        let selected = self.selected.ok_or(TravelError::NoDateSelected)?;
        if !bound.contains(selected) {
            return Err(TravelError::InvalidDateSelection {
                selected,
                min: bound.min_date(),
                max: bound.max_date(),
            });
        }

        let revision = match self.client.revision_as_of(&page, selected).await {
            Ok(revision) => revision,
            Err(e) => {
                tracing::error!(page = %page, date = %selected, error = %e, "revision lookup failed");
                self.view.show_error(&e.to_string());
                return Err(e.into());
            }
        };

        let target = self
            .client
            .site()
            .revision_url(&page.language_code, revision.revision_id);
        tracing::info!(page = %page, date = %selected, url = %target, "navigating");
        self.tab.navigate(&target);

        Ok(target)
    }
}
