use percent_encoding::percent_decode_str;

/// Turns a raw title taken from a URL into its display form
///
/// Percent-escapes are decoded (invalid UTF-8 is replaced, malformed escapes
/// are kept verbatim) and every underscore becomes a space.
///
/// ```
/// use wiki_time_travel::url::decode_title;
///
/// assert_eq!(decode_title("Atlantic_Ocean"), "Atlantic Ocean");
/// assert_eq!(decode_title("%C3%89cole_normale"), "École normale");
/// ```
pub fn decode_title(raw: &str) -> String {
    from_db_key(&percent_decode_str(raw).decode_utf8_lossy())
}

/// Converts the underscore form used in URLs and API queries to a display title
pub fn from_db_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Converts a display title to the underscore form used in API queries
pub fn to_db_key(title: &str) -> String {
    title.replace(' ', "_")
}
