//! HTTP plumbing shared by every API call
//!
//! Each call is a single GET: no retries and no caching. Failures are
//! classified into [`FetchFailure`] and converted into the error type of
//! whichever layer issued the request.

use crate::config::{Config, HttpConfig, SiteConfig, UserAgentConfig};
use crate::{LookupError, ResolutionError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// The user agent follows `Name/Version (+ContactURL; ContactEmail)`.
///
/// # Example
///
/// ```no_run
/// use wiki_time_travel::config::{HttpConfig, UserAgentConfig};
/// use wiki_time_travel::api::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        user_agent.client_name,
        user_agent.client_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for the MediaWiki query API of one wiki family
#[derive(Debug, Clone)]
pub struct RevisionClient {
    client: Client,
    site: SiteConfig,
}

/// Why a single API request produced no usable payload
#[derive(Debug)]
pub(crate) enum FetchFailure {
    Http { url: String, source: reqwest::Error },
    Status { url: String, status: u16 },
    Json { url: String, source: serde_json::Error },
    Api { code: String, info: String },
}

impl From<FetchFailure> for LookupError {
    fn from(failure: FetchFailure) -> Self {
        match failure {
            FetchFailure::Http { url, source } => Self::Http { url, source },
            FetchFailure::Status { url, status } => Self::Status { url, status },
            FetchFailure::Json { url, source } => Self::Json { url, source },
            FetchFailure::Api { code, info } => Self::Api { code, info },
        }
    }
}

impl From<FetchFailure> for ResolutionError {
    fn from(failure: FetchFailure) -> Self {
        match failure {
            FetchFailure::Http { url, source } => Self::Http { url, source },
            FetchFailure::Status { url, status } => Self::Status { url, status },
            FetchFailure::Json { url, source } => Self::Json { url, source },
            FetchFailure::Api { code, info } => Self::Api { code, info },
        }
    }
}

impl RevisionClient {
    /// Creates a client from the full configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.user_agent, &config.http)?;
        Ok(Self::with_client(client, config.site.clone()))
    }

    /// Wraps an existing HTTP client
    pub fn with_client(client: Client, site: SiteConfig) -> Self {
        Self { client, site }
    }

    /// Site layout this client targets
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Sends one GET to the API endpoint of `language_code` and decodes the body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        language_code: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchFailure> {
        let url = self.site.api_url(language_code);
        tracing::debug!(url = %url, ?params, "API request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| FetchFailure::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "API request failed");
            return Err(FetchFailure::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchFailure::Http {
            url: url.clone(),
            source,
        })?;

        let payload: Value = serde_json::from_str(&body).map_err(|source| FetchFailure::Json {
            url: url.clone(),
            source,
        })?;

        if let Some(error) = payload.get("error") {
            let code = error
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or("unknown_error")
                .to_string();
            let info = error
                .get("info")
                .and_then(Value::as_str)
                .unwrap_or("unknown info")
                .to_string();
            tracing::warn!(code = %code, info = %info, "MediaWiki API error");
            return Err(FetchFailure::Api { code, info });
        }

        serde_json::from_value(payload).map_err(|source| FetchFailure::Json { url, source })
    }
}
