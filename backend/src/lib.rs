//! User registry library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds the registration rules
//! and ports, `inbound` adapts HTTP onto the driving port, and `outbound`
//! provides the PostgreSQL and in-memory record stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
