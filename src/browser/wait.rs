use std::time::Duration;

use tracing::{debug, warn};

use crate::browser::driver::ConsoleDriver;
use crate::browser::error::DriverError;

/// Per-attempt navigation timeout before backoff doubling.
pub const NAVIGATION_BASE_TIMEOUT: Duration = Duration::from_secs(60);
pub const NAVIGATION_MAX_BACKOFF: Duration = Duration::from_secs(5);

/// Number of polls that fit in `timeout`, at least one.
pub fn attempts_for(timeout: Duration, interval: Duration) -> u32 {
    if interval.is_zero() {
        return 1;
    }
    let attempts = timeout.as_millis().div_ceil(interval.as_millis());
    attempts.clamp(1, u32::MAX as u128) as u32
}

/// Poll `predicate` until it holds, pausing `interval` between attempts.
///
/// Command failures inside the predicate count as "not yet"; a broken
/// session aborts immediately.
pub fn poll_until<F>(
    driver: &mut dyn ConsoleDriver,
    what: &str,
    timeout: Duration,
    interval: Duration,
    mut predicate: F,
) -> Result<(), DriverError>
where
    F: FnMut(&mut dyn ConsoleDriver) -> Result<bool, DriverError>,
{
    let attempts = attempts_for(timeout, interval);
    for attempt in 0..attempts {
        match predicate(driver) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) if e.is_recoverable() => debug!(%what, attempt, error = %e, "poll attempt failed"),
            Err(e) => return Err(e),
        }
        if attempt + 1 < attempts {
            driver.pause(interval);
        }
    }
    Err(DriverError::Timeout {
        what: what.to_string(),
        attempts,
    })
}

/// Backoff between navigation attempts: 1s, 2s, 4s, then capped.
pub fn backoff(attempt: u32) -> Duration {
    let secs = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_secs(secs).min(NAVIGATION_MAX_BACKOFF)
}

/// Navigate with exponential backoff.
///
/// The per-attempt timeout doubles each try. When the first HTTPS attempt
/// fails, one plain-HTTP fallback is tried before backing off. Returns
/// whether any attempt landed.
pub fn navigate_with_retry(
    driver: &mut dyn ConsoleDriver,
    url: &str,
    max_retries: u32,
) -> Result<bool, DriverError> {
    for attempt in 0..max_retries {
        let timeout = NAVIGATION_BASE_TIMEOUT * 2u32.saturating_pow(attempt);
        driver.set_timeout(timeout)?;

        match driver.navigate(url) {
            Ok(_) => {
                debug!(%url, attempt, "navigation succeeded");
                return Ok(true);
            }
            Err(e) if e.is_recoverable() => {
                warn!(%url, attempt = attempt + 1, max_retries, error = %e, "navigation failed");

                if attempt == 0 {
                    if let Some(rest) = url.strip_prefix("https://") {
                        let fallback = format!("http://{}", rest);
                        match driver.navigate(&fallback) {
                            Ok(_) => {
                                debug!(url = %fallback, "HTTP fallback succeeded");
                                return Ok(true);
                            }
                            Err(e) if e.is_recoverable() => {
                                debug!(url = %fallback, error = %e, "HTTP fallback failed");
                            }
                            Err(e) => return Err(e),
                        }
                    }
                }

                if attempt + 1 < max_retries {
                    driver.pause(backoff(attempt));
                }
            }
            Err(e) => return Err(e),
        }
    }
    Ok(false)
}
