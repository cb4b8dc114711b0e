use crate::config::types::{Config, HarvestConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_harvest_config(&config.harvest)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates harvest configuration
fn validate_harvest_config(config: &HarvestConfig) -> Result<(), ConfigError> {
    validate_http_url(&config.base_prefix, "base_prefix")?;

    // The template only becomes a full URL once a page number is appended
    let probe = format!("{}1", config.page_template);
    validate_http_url(&probe, "page_template")?;

    Ok(())
}

/// Checks that a string parses as an http(s) URL
fn validate_http_url(candidate: &str, field: &str) -> Result<(), ConfigError> {
    let url = Url::parse(candidate)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must be an http(s) URL, got scheme '{}'",
            field,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Basic email validation: one '@' with non-empty local part and a dotted domain
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = email.split('@').collect();

    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid contact_email: '{}'",
            email
        )));
    }

    if !parts[1].contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid contact_email domain: '{}'",
            parts[1]
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.queue_path.is_empty() {
        return Err(ConfigError::Validation(
            "queue_path cannot be empty".to_string(),
        ));
    }

    if config.canonical_path.is_empty() {
        return Err(ConfigError::Validation(
            "canonical_path cannot be empty".to_string(),
        ));
    }

    if config.log_path.is_empty() {
        return Err(ConfigError::Validation(
            "log_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
