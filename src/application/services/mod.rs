//! Business logic services for the application layer.

pub mod category_service;
pub mod post_service;
pub mod session_service;
pub mod tag_service;

pub use category_service::CategoryService;
pub use post_service::PostService;
pub use session_service::{OpenedSession, RequestSession, SessionProvider, SessionService};
pub use tag_service::TagService;

#[cfg(test)]
pub use session_service::MockSessionProvider;
