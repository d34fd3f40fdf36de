//! Application layer services implementing business logic.
//!
//! Services validate input, derive slugs, attribute posts to the current
//! session and hand publication events to the publish worker. They consume
//! repository traits and are shared with HTTP handlers through
//! [`crate::state::AppState`].
//!
//! # Available Services
//!
//! - [`services::CategoryService`] - Category listing and creation
//! - [`services::TagService`] - Tag listing and creation
//! - [`services::PostService`] - Post listing with category enrichment, creation and publication
//! - [`services::SessionService`] - Bearer-token sessions and the request-scoped [`services::SessionProvider`]

pub mod services;
