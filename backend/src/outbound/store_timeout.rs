//! Per-operation deadline shared by the user repository adapters.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::domain::ports::UserPersistenceError;

/// Run one store operation, aborting it once `limit` elapses.
///
/// The operation future is dropped on expiry, which releases any pooled
/// connection it holds.
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, UserPersistenceError>
where
    F: Future<Output = Result<T, UserPersistenceError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_elapsed) => {
            warn!(
                operation,
                timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                "store operation timed out"
            );
            Err(UserPersistenceError::timeout(operation))
        }
    }
}
