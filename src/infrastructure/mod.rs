//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations
//! - [`webhook`] - Outbound publication notifications

pub mod persistence;
pub mod webhook;
