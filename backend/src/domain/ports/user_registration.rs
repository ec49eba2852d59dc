//! Driving port for registering new users.
//!
//! Inbound adapters depend on this trait rather than on the concrete service
//! so handlers can be exercised against a substitute.

use async_trait::async_trait;

use crate::domain::{Error, NewUserDetails, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate, de-duplicate, and persist a new user.
    ///
    /// Returns the stored user including its generated identifier.
    async fn create_user(&self, details: NewUserDetails) -> Result<User, Error>;
}
