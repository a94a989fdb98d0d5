use crate::config::SiteConfig;
use url::Url;

/// Extracts the language code of an article URL on the default site
///
/// The language code is the first dot-delimited label of the host.
/// Returns `None` when the URL does not parse or its host is not
/// `<language>.wikipedia.org`.
///
/// # Examples
///
/// ```
/// use wiki_time_travel::url::page_language;
///
/// assert_eq!(
///     page_language("https://en.wikipedia.org/wiki/Atlantic_Ocean"),
///     Some("en".to_string())
/// );
/// assert_eq!(page_language("https://wikipedia.org/"), None);
/// ```
pub fn page_language(url: &str) -> Option<String> {
    page_language_with(url, &SiteConfig::default())
}

/// Extracts the language code of an article URL on the given site
pub fn page_language_with(url: &str, site: &SiteConfig) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    language_code_for_host(host, &site.domain)
}

/// Returns the first label of `host` if it is a subdomain of `domain`
///
/// The comparison is case-insensitive and the result is lowercase.
pub fn language_code_for_host(host: &str, domain: &str) -> Option<String> {
    let host = host.to_lowercase();
    let domain = domain.to_lowercase();

    let prefix = host.strip_suffix(domain.as_str())?.strip_suffix('.')?;
    let label = prefix.split('.').next()?;

    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
