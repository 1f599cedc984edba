use std::future::Future;
use std::time::Duration;

use business::domain::logger::Logger;

use crate::errors::GroqError;

/// Runs `operation` once, then again up to `max_retries` times while it
/// fails with a retryable error, sleeping `delay` between attempts.
///
/// The closure receives the zero-based attempt number.
pub async fn with_retries<T, F, Fut>(
    max_retries: u32,
    delay: Duration,
    logger: &dyn Logger,
    mut operation: F,
) -> Result<T, GroqError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, GroqError>>,
{
    let mut attempt = 0;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < max_retries => {
                attempt += 1;
                logger.warn(&format!(
                    "Groq request failed ({}), retrying ({}/{})",
                    err, attempt, max_retries
                ));
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
