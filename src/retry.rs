//! Bounded retry for fallible remote operations.
//!
//! Every call to the metadata service and the delivery endpoint goes through
//! [`with_retry`]. The policy is a fixed delay between a bounded number of
//! total attempts; which errors are worth another attempt is decided by a
//! classifier, [`IsRetryable`] by default.

use std::future::Future;

use crate::config::RetryConfig;
use crate::error::Error;

/// Classification of errors into transient (retry) and permanent (fail fast).
pub trait IsRetryable {
    /// Returns true if the operation should be attempted again.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            // Transport failures and every non-success status, 404 included.
            Error::Network(_) | Error::HttpStatus { .. } => true,
            Error::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::Interrupted
            ),
            Error::MalformedResponse(_)
            | Error::TrackUnavailable(_)
            | Error::Resolution { .. }
            | Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::TomlParse(_) => false,
        }
    }
}

/// Default classifier for a retry policy.
///
/// With `retry_not_found` disabled a 404 fails immediately instead of using up
/// the remaining attempts.
pub fn default_classifier(config: &RetryConfig) -> impl Fn(&Error) -> bool + '_ {
    move |error: &Error| {
        if !config.retry_not_found && error.is_not_found() {
            return false;
        }
        error.is_retryable()
    }
}

/// Run `operation` until it succeeds, fails permanently or runs out of attempts.
///
/// `config.max_attempts` is the total number of calls; a value of zero is
/// treated as one. The last error is returned unchanged.
pub async fn with_retry<F, Fut, T, E, C>(
    config: &RetryConfig,
    classify: C,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    C: Fn(&E) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(attempts = attempt, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts && classify(&e) => {
                tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    max_attempts = max_attempts,
                    delay_ms = config.delay.as_millis() as u64,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(config.delay).await;
                attempt += 1;
            }
            Err(e) => {
                if attempt >= max_attempts {
                    tracing::error!(
                        error = %e,
                        attempts = attempt,
                        "Operation failed after all retry attempts exhausted"
                    );
                } else {
                    tracing::debug!(error = %e, "Operation failed with non-retryable error");
                }
                return Err(e);
            }
        }
    }
}

/// [`with_retry`] using the [`default_classifier`] for `config`.
pub async fn retry<F, Fut, T>(config: &RetryConfig, operation: F) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    with_retry(config, default_classifier(config), operation).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio_test::{assert_err, assert_ok};

    fn transient() -> Error {
        Error::HttpStatus {
            status: 503,
            url: "http://localhost/download/x".into(),
        }
    }

    #[tokio::test]
    async fn test_succeeds_on_third_attempt() {
        let calls = Cell::new(0);
        let config = RetryConfig::immediate(3);

        let result = retry(&config, || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(transient())
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(assert_ok!(result), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = Cell::new(0);
        let config = RetryConfig::immediate(3);

        let result: Result<(), Error> = retry(&config, || {
            calls.set(calls.get() + 1);
            async { Err(transient()) }
        })
        .await;

        let err = assert_err!(result);
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_not_retried() {
        let calls = Cell::new(0);
        let config = RetryConfig::immediate(3);

        let result: Result<(), Error> = retry(&config, || {
            calls.set(calls.get() + 1);
            async { Err(Error::MalformedResponse("missing trackList".into())) }
        })
        .await;

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_not_found_retried_by_default() {
        let calls = Cell::new(0);
        let config = RetryConfig::immediate(3);

        let result: Result<(), Error> = retry(&config, || {
            calls.set(calls.get() + 1);
            async {
                Err(Error::HttpStatus {
                    status: 404,
                    url: "http://localhost/track/gone".into(),
                })
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_not_found_fails_fast_when_disabled() {
        let calls = Cell::new(0);
        let mut config = RetryConfig::immediate(3);
        config.retry_not_found = false;

        let result: Result<(), Error> = retry(&config, || {
            calls.set(calls.get() + 1);
            async {
                Err(Error::HttpStatus {
                    status: 404,
                    url: "http://localhost/track/gone".into(),
                })
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_calls_once() {
        let calls = Cell::new(0);
        let config = RetryConfig::immediate(0);

        let result: Result<(), Error> = retry(&config, || {
            calls.set(calls.get() + 1);
            async { Err(transient()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_custom_classifier() {
        let calls = Cell::new(0);
        let config = RetryConfig::immediate(4);

        let result: Result<(), String> = with_retry(
            &config,
            |e: &String| e == "again",
            || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n == 1 {
                        Err("again".to_string())
                    } else {
                        Err("stop".to_string())
                    }
                }
            },
        )
        .await;

        assert_eq!(result.unwrap_err(), "stop");
        assert_eq!(calls.get(), 2);
    }
}
