//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Upper bound on attempts per call.
const MAX_ATTEMPTS_LIMIT: u32 = 20;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url("api.metadata_base", &config.api.metadata_base)?;
    validate_base_url("api.delivery_base", &config.api.delivery_base)?;
    validate_retry(config.retry.max_attempts)?;

    if config.api.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "api.timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Validate a service base URL.
pub fn validate_base_url(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", value, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Unsupported scheme '{}' (expected http or https)", url.scheme()),
        });
    }

    Ok(url)
}

/// Validate the retry attempt limit.
pub fn validate_retry(max_attempts: u32) -> Result<()> {
    if max_attempts == 0 {
        return Err(Error::ConfigValidation {
            field: "retry.max_attempts".to_string(),
            message: "At least one attempt is required".to_string(),
        });
    }

    if max_attempts > MAX_ATTEMPTS_LIMIT {
        return Err(Error::ConfigValidation {
            field: "retry.max_attempts".to_string(),
            message: format!(
                "At most {} attempts are allowed (got {})",
                MAX_ATTEMPTS_LIMIT, max_attempts
            ),
        });
    }

    Ok(())
}
