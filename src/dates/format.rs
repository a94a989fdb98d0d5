use chrono::{DateTime, NaiveDate, Utc};

/// Normalizes raw date input to a calendar date
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, which is reduced to its
/// UTC date. Blank or unparseable input yields `None`.
///
/// ```
/// use chrono::NaiveDate;
/// use wiki_time_travel::dates::parse_date_input;
///
/// let expected = NaiveDate::from_ymd_opt(2010, 3, 7);
/// assert_eq!(parse_date_input("2010-03-07"), expected);
/// assert_eq!(parse_date_input("2010-03-07T01:30:00+02:00"), NaiveDate::from_ymd_opt(2010, 3, 6));
/// assert_eq!(parse_date_input(""), None);
/// ```
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Long date in day-month-year order, e.g. `6 November 2001`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Text shown next to the page title
pub fn creation_text(created: NaiveDate) -> String {
    format!("Page created on {}", format_long_date(created))
}
