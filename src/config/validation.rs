use crate::config::types::{Config, HttpConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates site layout configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_domain_string(&config.domain)?;

    if config.scheme != "https" && config.scheme != "http" {
        return Err(ConfigError::Validation(format!(
            "scheme must be 'http' or 'https', got '{}'",
            config.scheme
        )));
    }

    for (name, path) in [
        ("api-path", &config.api_path),
        ("index-path", &config.index_path),
        ("article-path", &config.article_path),
    ] {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must start with '/', got '{}'",
                name, path
            )));
        }
    }

    if config.article_path.len() < 2 || !config.article_path.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "article-path must be a '/'-terminated prefix such as '/wiki/', got '{}'",
            config.article_path
        )));
    }

    if let Some(origin) = &config.endpoint_override {
        let url = Url::parse(origin).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid endpoint-override '{}': {}", origin, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "endpoint-override '{}' must use http or https",
                origin
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client-name cannot be empty".to_string(),
        ));
    }

    if !config
        .client_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.client_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates HTTP timeouts
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    for (name, secs) in [
        ("timeout-secs", config.timeout_secs),
        ("connect-timeout-secs", config.connect_timeout_secs),
    ] {
        if !(1..=300).contains(&secs) {
            return Err(ConfigError::Validation(format!(
                "{} must be between 1 and 300, got {}",
                name, secs
            )));
        }
    }

    Ok(())
}

/// Validates a bare domain such as `wikipedia.org`
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::Validation("domain cannot be empty".to_string()));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    if domain.contains("..") {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' must contain at least one dot (e.g., 'wikipedia.org')",
            domain
        )));
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ConfigError::Validation(format!(
            "Invalid contact-email format: '{}'",
            email
        )));
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ConfigError::Validation(format!(
            "Invalid contact-email format: '{}'",
            email
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid contact-email domain: '{}'",
            email
        )));
    }

    Ok(())
}
