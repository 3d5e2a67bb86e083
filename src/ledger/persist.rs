use crate::blob::BlobStore;
use crate::errors::{AppError, AppResult};
use std::time::Duration;
use tracing::{error, warn};

/// How hard a snapshot write is retried before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistPolicy {
    /// Extra attempts after the first one.
    pub retries: u32,
    /// Delay before the first retry; doubled after each failure.
    pub backoff: Duration,
}

impl Default for PersistPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            backoff: Duration::from_millis(50),
        }
    }
}

impl PersistPolicy {
    pub fn new(retries: u32, backoff_ms: u64) -> Self {
        Self {
            retries,
            backoff: Duration::from_millis(backoff_ms),
        }
    }

    /// Single attempt, no waiting.
    pub fn no_retry() -> Self {
        Self::new(0, 0)
    }
}

/// Write `blob` under `key`, retrying with exponential backoff.
/// Returns the number of attempts it took.
pub(crate) async fn put_with_retry<B: BlobStore + ?Sized>(
    blobs: &B,
    key: &str,
    blob: Vec<u8>,
    policy: &PersistPolicy,
) -> AppResult<u32> {
    let max_attempts = policy.retries.saturating_add(1);
    let mut delay = policy.backoff;
    let mut attempt = 0;

    loop {
        attempt += 1;
        match blobs.put(key, blob.clone()).await {
            Ok(()) => return Ok(attempt),
            Err(e) if attempt < max_attempts => {
                warn!(key, attempt, max_attempts, error = %e, "snapshot write failed, retrying");
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                delay = delay.saturating_mul(2);
            }
            Err(e) => {
                error!(key, attempts = attempt, error = %e, "snapshot write failed, giving up");
                return Err(AppError::Persist {
                    attempts: attempt,
                    reason: e.to_string(),
                });
            }
        }
    }
}
