//! Driven port for user persistence adapters and their errors.
//!
//! Adapters bound every store round trip by [`STORE_OPERATION_TIMEOUT`] and
//! report expiry as [`UserPersistenceError::Timeout`]. Nothing is retried.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

/// Upper bound for a single store operation (lookup or insert).
pub const STORE_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or insert failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store did not answer within the operation timeout.
        Timeout { operation: String } => "user repository {operation} timed out",
        /// A record with the same national ID or email is already stored.
        DuplicateKey { message: String } => "user repository duplicate key: {message}",
    }
}

/// Acknowledgement returned by the store after a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertAcknowledgement {
    pub inserted_id: UserId,
}

/// Record store for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Report whether any stored user has this national ID or this email.
    ///
    /// An empty match is `Ok(false)`, not an error.
    async fn exists(&self, national_id: &str, email: &str) -> Result<bool, UserPersistenceError>;

    /// Insert `user` unless a record sharing its national ID or email exists.
    ///
    /// Implementations repeat the existence check immediately before the
    /// insert and fail with [`UserPersistenceError::DuplicateKey`] on a match.
    async fn create(&self, user: &User) -> Result<InsertAcknowledgement, UserPersistenceError>;
}
