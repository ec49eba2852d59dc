//! HTTP inbound adapter exposing the registration endpoint and health checks.

pub mod envelope;
pub mod error;
pub mod health;
pub mod state;
pub mod users;

pub use error::ApiResult;
