//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! The existence check is a single OR-filtered lookup over `national_id` and
//! `email`. `create` repeats that lookup right before inserting; the unique
//! indexes on both columns catch whatever still slips through between the two
//! statements.

use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{
    InsertAcknowledgement, STORE_OPERATION_TIMEOUT, UserPersistenceError, UserRepository,
};
use crate::domain::{User, UserId};

use super::super::store_timeout::bounded;
use super::models::NewUserRow;
use super::pool::DbPool;
use super::schema::users;
use super::user_error_mapping::map_diesel_error;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    operation_timeout: Duration,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            operation_timeout: STORE_OPERATION_TIMEOUT,
        }
    }

    async fn find_match(&self, national_id: &str, email: &str) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.checkout().await?;

        let found: Option<Uuid> = users::table
            .filter(users::national_id.eq(national_id).or(users::email.eq(email)))
            .select(users::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(found.is_some())
    }

    async fn insert(&self, user: &User) -> Result<InsertAcknowledgement, UserPersistenceError> {
        let mut conn = self.pool.checkout().await?;

        let inserted: Uuid = diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(users::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(InsertAcknowledgement {
            inserted_id: UserId::from_uuid(inserted),
        })
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn exists(&self, national_id: &str, email: &str) -> Result<bool, UserPersistenceError> {
        bounded(
            "existence check",
            self.operation_timeout,
            self.find_match(national_id, email),
        )
        .await
    }

    async fn create(&self, user: &User) -> Result<InsertAcknowledgement, UserPersistenceError> {
        if self.exists(user.national_id(), user.email()).await? {
            return Err(UserPersistenceError::duplicate_key(
                "national ID or email already registered",
            ));
        }

        bounded("insert", self.operation_timeout, self.insert(user)).await
    }
}
