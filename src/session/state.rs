//! Session state definitions for one popup activation

use crate::dates::DateBound;
use crate::identity::PageReference;
use std::fmt;

/// Where a session stands after loading the current URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The current URL has not been looked at yet
    Unclassified,

    /// The current URL is not an article; nothing else happens this session
    NotAPage,

    /// The page is resolved and its date window is known
    Page {
        page: PageReference,
        bound: DateBound,
    },

    /// Resolution or the first-revision lookup failed; the action stays disabled
    Failed { message: String },
}

impl SessionState {
    /// Returns true if no further transitions can happen
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotAPage | Self::Failed { .. })
    }

    /// Returns true if the user may trigger a revision lookup
    pub fn accepts_action(&self) -> bool {
        matches!(self, Self::Page { .. })
    }

    /// The resolved page and its bound, if any
    pub fn page(&self) -> Option<(&PageReference, &DateBound)> {
        match self {
            Self::Page { page, bound } => Some((page, bound)),
            _ => None,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::NotAPage => "not_a_page",
            Self::Page { .. } => "page",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
