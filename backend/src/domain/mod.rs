//! Domain primitives, ports, and the registration service.
//!
//! Purpose: keep the registration rules independent of HTTP and of the record
//! store. Inbound adapters call the [`ports::UserRegistration`] driving port;
//! outbound adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - `Error` / `ErrorCode` — transport-agnostic failure payload.
//! - `User`, `UserId`, `NewUserDetails` — the registered entity and its input.
//! - `UserRegistrationService` — validation, duplicate check, and insert.
//! - `TraceId` — request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_registration;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{NewUserDetails, User, UserId};
pub use self::user_registration::{
    DUPLICATE_USER_MESSAGE, EXISTENCE_CHECK_FAILED_MESSAGE, MISSING_FIELDS_MESSAGE,
    REGISTRATION_FAILED_MESSAGE, UserRegistrationService,
};
