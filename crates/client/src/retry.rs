//! Bounded retry helper: fixed delay, fixed attempt cap.
//!
//! Offered to callers that want it; the API client does not apply it on
//! its own, so a failed mutation surfaces immediately rather than being
//! silently replayed.

use std::future::Future;
use std::time::Duration;

/// Default attempt cap.
pub const MAX_ATTEMPTS: u32 = 3;

/// Default pause between attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Run `operation` until it succeeds or `max_attempts` tries have failed,
/// pausing `delay` between attempts. The final error is returned as-is.
pub async fn retry_with_delay<T, E, F, Fut>(
    mut operation: F,
    max_attempts: u32,
    delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts {
                    return Err(err);
                }
                attempt += 1;
                tokio::time::sleep(delay).await;
            }
        }
    }
}
