//! User data model.
//!
//! A [`User`] is created once by the registration service and never mutated.
//! Its JSON form reuses the inbound field names so clients read back exactly
//! what they submitted, plus the generated `id`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The five caller-supplied attributes of a user awaiting registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub national_id: String,
    pub email: String,
}

impl NewUserDetails {
    /// Names of the fields that are empty, in declaration order.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::NewUserDetails;
    ///
    /// let details = NewUserDetails {
    ///     name: "Juan".into(),
    ///     ..NewUserDetails::default()
    /// };
    /// assert_eq!(
    ///     details.missing_fields(),
    ///     vec!["phone", "address", "national_id", "email"]
    /// );
    /// ```
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("national_id", &self.national_id),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[serde(rename = "nombre")]
    #[schema(example = "Juan")]
    name: String,
    #[serde(rename = "telefono")]
    #[schema(example = "123456789")]
    phone: String,
    #[serde(rename = "direccion")]
    #[schema(example = "Calle 123")]
    address: String,
    #[serde(rename = "cedula")]
    #[schema(example = "12345678")]
    national_id: String,
    #[serde(rename = "correo")]
    #[schema(example = "juan@example.com")]
    email: String,
}

impl User {
    /// Assemble a user from an identifier and its registration details.
    #[must_use]
    pub fn new(id: UserId, details: NewUserDetails) -> Self {
        let NewUserDetails {
            name,
            phone,
            address,
            national_id,
            email,
        } = details;
        Self {
            id,
            name,
            phone,
            address,
            national_id,
            email,
        }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn juan() -> NewUserDetails {
        NewUserDetails {
            name: "Juan".into(),
            phone: "123456789".into(),
            address: "Calle 123".into(),
            national_id: "12345678".into(),
            email: "juan@example.com".into(),
        }
    }

    #[rstest]
    fn complete_details_have_no_missing_fields(juan: NewUserDetails) {
        assert!(juan.missing_fields().is_empty());
    }

    #[rstest]
    fn whitespace_is_not_treated_as_missing(mut juan: NewUserDetails) {
        juan.address = " ".into();
        assert!(juan.missing_fields().is_empty());
    }

    #[rstest]
    fn serialises_with_inbound_field_names(juan: NewUserDetails) {
        let id = UserId::from_uuid(Uuid::nil());
        let value = serde_json::to_value(User::new(id, juan)).expect("serialise user");

        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "nombre": "Juan",
                "telefono": "123456789",
                "direccion": "Calle 123",
                "cedula": "12345678",
                "correo": "juan@example.com",
            })
        );
    }
}
