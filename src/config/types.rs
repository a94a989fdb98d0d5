use serde::Deserialize;

/// Main configuration structure for Wiki Time Travel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Where the wiki family lives and how its endpoints are laid out
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Host family; articles live on `<language>.<domain>`
    pub domain: String,

    /// Scheme used for API and navigation URLs
    pub scheme: String,

    /// Path of the API endpoint
    #[serde(rename = "api-path")]
    pub api_path: String,

    /// Path of the index endpoint (`index.php`)
    #[serde(rename = "index-path")]
    pub index_path: String,

    /// Path prefix of pretty article URLs
    #[serde(rename = "article-path")]
    pub article_path: String,

    /// Sends every language to this origin instead of `<language>.<domain>`
    #[serde(rename = "endpoint-override")]
    pub endpoint_override: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: "wikipedia.org".to_string(),
            scheme: "https".to_string(),
            api_path: "/w/api.php".to_string(),
            index_path: "/w/index.php".to_string(),
            article_path: "/wiki/".to_string(),
            endpoint_override: None,
        }
    }
}

impl SiteConfig {
    /// Origin (scheme and host, no trailing slash) serving the given language
    ///
    /// ```
    /// use wiki_time_travel::config::SiteConfig;
    ///
    /// let site = SiteConfig::default();
    /// assert_eq!(site.origin("en"), "https://en.wikipedia.org");
    /// ```
    pub fn origin(&self, language_code: &str) -> String {
        match &self.endpoint_override {
            Some(origin) => origin.trim_end_matches('/').to_string(),
            None => format!("{}://{}.{}", self.scheme, language_code, self.domain),
        }
    }

    /// Full API endpoint URL for the given language
    pub fn api_url(&self, language_code: &str) -> String {
        format!("{}{}", self.origin(language_code), self.api_path)
    }

    /// URL that opens a specific revision on the given language's wiki
    pub fn revision_url(&self, language_code: &str, revision_id: u64) -> String {
        format!(
            "{}{}?&oldid={}",
            self.origin(language_code),
            self.index_path,
            revision_id
        )
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "client-name")]
    pub client_name: String,

    /// Version of the client
    #[serde(rename = "client-version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: "wiki-time-travel".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.org/wiki-time-travel".to_string(),
            contact_email: "maintainer@example.org".to_string(),
        }
    }
}

/// HTTP client behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
