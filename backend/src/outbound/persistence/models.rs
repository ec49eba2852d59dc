//! Internal Diesel row structs for the users table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::User;

use super::schema::users;

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub national_id: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name(),
            phone: user.phone(),
            address: user.address(),
            national_id: user.national_id(),
            email: user.email(),
        }
    }
}
