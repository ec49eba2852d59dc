//! User registration domain service.
//!
//! Implements the [`UserRegistration`] driving port on top of a
//! [`UserRepository`]. The flow is strictly linear: field validation, a
//! duplicate pre-check, construction with a fresh identifier, then the insert.
//! Every repository failure on the insert path collapses into the same
//! infrastructure error, including a duplicate caught by the repository's own
//! re-check.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{UserRegistration, UserRepository};
use crate::domain::{Error, NewUserDetails, User, UserId};

pub const MISSING_FIELDS_MESSAGE: &str = "all fields are mandatory";
pub const EXISTENCE_CHECK_FAILED_MESSAGE: &str = "failed verifying existing user";
pub const DUPLICATE_USER_MESSAGE: &str = "user with same ID or email already exists";
pub const REGISTRATION_FAILED_MESSAGE: &str = "failed registering user";

/// Registration service backed by a user repository.
pub struct UserRegistrationService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> UserRegistrationService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UserRegistration for UserRegistrationService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, details: NewUserDetails) -> Result<User, Error> {
        let missing = details.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "user registration rejected: empty fields");
            return Err(Error::validation(MISSING_FIELDS_MESSAGE));
        }

        let exists = self
            .repository
            .exists(&details.national_id, &details.email)
            .await
            .map_err(|err| {
                error!(error = %err, "existence check failed");
                Error::infrastructure(EXISTENCE_CHECK_FAILED_MESSAGE)
            })?;
        if exists {
            warn!("user registration rejected: national ID or email already registered");
            return Err(Error::conflict(DUPLICATE_USER_MESSAGE));
        }

        let user = User::new(UserId::random(), details);

        let ack = self.repository.create(&user).await.map_err(|err| {
            error!(error = %err, user_id = %user.id(), "user insert failed");
            Error::infrastructure(REGISTRATION_FAILED_MESSAGE)
        })?;

        info!(user_id = %ack.inserted_id, "user registered");
        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_registration_tests.rs"]
mod tests;
