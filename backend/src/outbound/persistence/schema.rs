//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Registered users.
    ///
    /// `national_id` and `email` each carry their own unique index.
    users (id) {
        /// Primary key: UUID v4 assigned by the registration service.
        id -> Uuid,
        name -> Varchar,
        phone -> Varchar,
        address -> Varchar,
        national_id -> Varchar,
        email -> Varchar,
        /// Insertion timestamp set by the database.
        created_at -> Timestamptz,
    }
}
