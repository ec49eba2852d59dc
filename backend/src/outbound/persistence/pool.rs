//! bb8 pool of `diesel-async` PostgreSQL connections for the user store.
//!
//! Waiting for a free connection never outlasts one store operation, so a
//! saturated pool surfaces as a connection failure rather than a stall.

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::domain::ports::{STORE_OPERATION_TIMEOUT, UserPersistenceError};

/// The pool could not be created from the configured settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to build user store pool ({max_size} connections): {message}")]
pub struct PoolError {
    max_size: u32,
    message: String,
}

/// Shared handle to the user store's connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool of at most `max_size` connections to `database_url`.
    ///
    /// Connections are opened lazily on first checkout.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when `max_size` is zero or bb8 rejects the
    /// settings.
    pub async fn connect(database_url: &str, max_size: u32) -> Result<Self, PoolError> {
        if max_size == 0 {
            return Err(PoolError {
                max_size,
                message: "pool size must be at least one".to_owned(),
            });
        }

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let inner = Pool::builder()
            .max_size(max_size)
            .connection_timeout(STORE_OPERATION_TIMEOUT)
            .build(manager)
            .await
            .map_err(|err| PoolError {
                max_size,
                message: err.to_string(),
            })?;

        Ok(Self { inner })
    }

    /// Check out a connection for one repository call.
    pub(super) async fn checkout(
        &self,
    ) -> Result<PooledConnection<'_, AsyncPgConnection>, UserPersistenceError> {
        self.inner
            .get()
            .await
            .map_err(|err| UserPersistenceError::connection(err.to_string()))
    }
}
