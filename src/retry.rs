//! Retry with exponential backoff for transient failures. A reusable
//! utility for collaborator calls; the scoring/archetype path never retries.

use std::future::Future;
use std::time::Duration;

use log::warn;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct RetryOptions {
    /// Maximum number of retry attempts after the initial try.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on the delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_multiplier: f64,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

/// Runs `operation` until it succeeds, retries are exhausted, or
/// `should_retry` declines the error. The last error is returned unchanged.
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    mut operation: F,
    options: &RetryOptions,
    mut should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: FnMut(&E) -> bool,
{
    let mut delay = options.initial_delay;

    for attempt in 0..=options.max_retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt == options.max_retries || !should_retry(&error) {
                    return Err(error);
                }
                warn!(
                    "Attempt {} failed ({}), retrying in {:?}",
                    attempt + 1,
                    error,
                    delay
                );
                tokio::time::sleep(delay).await;
                delay = next_delay(delay, options);
            }
        }
    }

    unreachable!("retry loop always returns")
}

/// Like [`retry_with_backoff`] but randomizes each wait between zero and the
/// current base delay, spreading out simultaneous retriers.
pub async fn retry_with_jitter<T, E, F, Fut, P>(
    mut operation: F,
    options: &RetryOptions,
    mut should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: FnMut(&E) -> bool,
{
    let mut base_delay = options.initial_delay;

    for attempt in 0..=options.max_retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt == options.max_retries || !should_retry(&error) {
                    return Err(error);
                }
                let jittered = base_delay.mul_f64(rand::thread_rng().gen_range(0.0..1.0));
                let jittered = jittered.min(options.max_delay);
                warn!(
                    "Attempt {} failed ({}), retrying in {:?}",
                    attempt + 1,
                    error,
                    jittered
                );
                tokio::time::sleep(jittered).await;
                base_delay = next_delay(base_delay, options);
            }
        }
    }

    unreachable!("retry loop always returns")
}

fn next_delay(delay: Duration, options: &RetryOptions) -> Duration {
    delay.mul_f64(options.backoff_multiplier).min(options.max_delay)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn fast_options() -> RetryOptions {
        RetryOptions {
            max_retries: 3,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
            backoff_multiplier: 2.0,
        }
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let attempts = AtomicU32::new(0);

        let result: Result<u32, String> = retry_with_backoff(
            || {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err("transient".to_string())
                    } else {
                        Ok(n)
                    }
                }
            },
            &fast_options(),
            |_| true,
        )
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let attempts = AtomicU32::new(0);

        let result: Result<(), String> = retry_with_backoff(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err("still broken".to_string()) }
            },
            &fast_options(),
            |_| true,
        )
        .await;

        assert_eq!(result, Err("still broken".to_string()));
        // Initial try plus three retries.
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn non_retryable_errors_return_immediately() {
        let attempts = AtomicU32::new(0);

        let result: Result<(), String> = retry_with_backoff(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err("fatal".to_string()) }
            },
            &fast_options(),
            |e| e != "fatal",
        )
        .await;

        assert_eq!(result, Err("fatal".to_string()));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn jittered_retry_still_converges() {
        let attempts = AtomicU32::new(0);

        let result: Result<u32, String> = retry_with_jitter(
            || {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err("transient".to_string())
                    } else {
                        Ok(n)
                    }
                }
            },
            &fast_options(),
            |_| true,
        )
        .await;

        assert_eq!(result, Ok(1));
    }

    #[test]
    fn delay_growth_is_capped() {
        let options = fast_options();
        let grown = next_delay(Duration::from_millis(3), &options);
        assert_eq!(grown, Duration::from_millis(4));
    }
}
