//! Date handling for the revision picker
//!
//! Everything here works on calendar dates in UTC: the valid window is
//! `[creation date, today]`, inclusive at both ends.

mod bound;
mod format;

pub use bound::{is_valid, DateBound};
pub use format::{creation_text, format_long_date, parse_date_input};
