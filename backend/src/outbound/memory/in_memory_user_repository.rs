//! In-memory `UserRepository` implementation.
//!
//! Records live in a map guarded by an async mutex. The duplicate re-check and
//! the insert run under one lock acquisition, so this adapter never admits two
//! users sharing a national ID or email.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{
    InsertAcknowledgement, STORE_OPERATION_TIMEOUT, UserPersistenceError, UserRepository,
};
use crate::domain::{User, UserId};

use super::super::store_timeout::bounded;

/// Volatile user store keyed by identifier.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    operation_timeout: Duration,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            operation_timeout: STORE_OPERATION_TIMEOUT,
        }
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().map(|user| (user.id(), user)).collect()),
            ..Self::default()
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }

    fn matches(users: &HashMap<UserId, User>, national_id: &str, email: &str) -> bool {
        users
            .values()
            .any(|user| user.national_id() == national_id || user.email() == email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists(&self, national_id: &str, email: &str) -> Result<bool, UserPersistenceError> {
        bounded("existence check", self.operation_timeout, async {
            let users = self.users.lock().await;
            Ok(Self::matches(&users, national_id, email))
        })
        .await
    }

    async fn create(&self, user: &User) -> Result<InsertAcknowledgement, UserPersistenceError> {
        bounded("insert", self.operation_timeout, async {
            let mut users = self.users.lock().await;
            if Self::matches(&users, user.national_id(), user.email()) {
                return Err(UserPersistenceError::duplicate_key(
                    "national ID or email already registered",
                ));
            }
            users.insert(user.id(), user.clone());
            Ok(InsertAcknowledgement {
                inserted_id: user.id(),
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUserDetails;
    use rstest::{fixture, rstest};

    fn user(national_id: &str, email: &str) -> User {
        User::new(
            UserId::random(),
            NewUserDetails {
                name: "Ana".into(),
                phone: "987654321".into(),
                address: "Carrera 45".into(),
                national_id: national_id.into(),
                email: email.into(),
            },
        )
    }

    #[fixture]
    fn ana() -> User {
        user("87654321", "ana@example.com")
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_reports_no_match() {
        let repo = InMemoryUserRepository::new();
        let found = repo
            .exists("87654321", "ana@example.com")
            .await
            .expect("lookup succeeds");
        assert!(!found);
    }

    #[rstest]
    #[case::national_id("87654321", "other@example.com")]
    #[case::email("11111111", "ana@example.com")]
    #[case::both("87654321", "ana@example.com")]
    #[tokio::test]
    async fn either_key_matches(ana: User, #[case] national_id: &str, #[case] email: &str) {
        let repo = InMemoryUserRepository::with_users([ana]);
        let found = repo
            .exists(national_id, email)
            .await
            .expect("lookup succeeds");
        assert!(found);
    }

    #[rstest]
    #[tokio::test]
    async fn create_acknowledges_inserted_identifier(ana: User) {
        let repo = InMemoryUserRepository::new();
        let ack = repo.create(&ana).await.expect("insert succeeds");

        assert_eq!(ack.inserted_id, ana.id());
        assert_eq!(repo.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_email(ana: User) {
        let repo = InMemoryUserRepository::with_users([ana]);
        let clash = user("22222222", "ana@example.com");

        let error = repo.create(&clash).await.expect_err("duplicate");

        assert!(matches!(error, UserPersistenceError::DuplicateKey { .. }));
        assert_eq!(repo.len().await, 1);
    }
}
