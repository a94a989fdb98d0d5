use crate::api::RevisionPointer;
use chrono::{NaiveDate, Utc};

/// Inclusive window of dates for which a revision lookup makes sense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBound {
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl DateBound {
    /// Creates a bound, raising `max_date` to `min_date` if they are inverted
    pub fn new(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        if min_date > max_date {
            tracing::warn!(
                %min_date,
                %max_date,
                "creation date is after today; clamping the upper bound"
            );
        }
        Self {
            min_date,
            max_date: max_date.max(min_date),
        }
    }

    /// Bound running from the day of the first revision to `today`
    pub fn from_first_revision(first: &RevisionPointer, today: NaiveDate) -> Self {
        Self::new(first.date(), today)
    }

    /// Bound running from the day of the first revision to the current UTC date
    pub fn until_today(first: &RevisionPointer) -> Self {
        Self::from_first_revision(first, Utc::now().date_naive())
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// Returns true if `date` falls inside the bound
    pub fn contains(&self, date: NaiveDate) -> bool {
        is_valid(Some(date), self.min_date, self.max_date)
    }
}

/// Checks a selected date against an inclusive `[min, max]` range
///
/// An unset selection is never valid.
///
/// ```
/// use chrono::NaiveDate;
/// use wiki_time_travel::dates::is_valid;
///
/// let min = NaiveDate::from_ymd_opt(2001, 11, 6).unwrap();
/// let max = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(is_valid(Some(min), min, max));
/// assert!(!is_valid(None, min, max));
/// ```
pub fn is_valid(selected: Option<NaiveDate>, min: NaiveDate, max: NaiveDate) -> bool {
    matches!(selected, Some(date) if min <= date && date <= max)
}
