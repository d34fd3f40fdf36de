//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod health;
pub mod posts;
pub mod session;
pub mod tags;

pub use categories::{create_category_handler, list_categories_handler};
pub use health::health_handler;
pub use posts::{create_post_handler, list_posts_handler};
pub use session::{current_session_handler, sign_out_handler};
pub use tags::{create_tag_handler, list_tags_handler};
