use crate::config::types::{Config, PolitenessConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_user_agent_config(&config.user_agent)?;
    validate_politeness_config(&config.politeness)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    // Validate crawler name: non-empty, usable as a robots.txt token
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only ASCII alphanumerics, '-' or '_', got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawl delay bounds
fn validate_politeness_config(config: &PolitenessConfig) -> ConfigResult<()> {
    if config.default_crawl_delay > config.max_crawl_delay {
        return Err(ConfigError::Validation(format!(
            "default_crawl_delay ({}s) cannot exceed max_crawl_delay ({}s)",
            config.default_crawl_delay, config.max_crawl_delay
        )));
    }

    Ok(())
}
