//! Collaborator interfaces the session talks to
//!
//! The browser tab and the popup UI live outside this crate. A front end
//! implements these traits; tests use recording fakes.

use crate::dates::DateBound;

/// Access to the active tab
pub trait TabPort {
    /// URL currently shown in the tab
    fn current_url(&self) -> String;

    /// Sends the tab to `url`
    fn navigate(&mut self, url: &str);
}

/// What the popup displays
pub trait PopupView {
    /// Hide the form and show the "not an article" placeholder
    fn show_not_a_page(&mut self);

    /// Show the resolved page, its creation text, and the date input bounds
    fn show_page(&mut self, title: &str, creation_text: &str, bound: &DateBound);

    /// Enable or disable the action control
    fn set_action_enabled(&mut self, enabled: bool);

    /// Show that something failed in place of page details
    fn show_error(&mut self, message: &str);
}
