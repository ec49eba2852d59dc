//! Outbound adapters implementing domain ports for the record store.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **memory**: process-local repository for development and tests
//!
//! Adapters translate between domain types and store representations and
//! bound every store round trip with the same per-operation timeout. They
//! contain no registration rules.

pub mod memory;
pub mod persistence;
mod store_timeout;
