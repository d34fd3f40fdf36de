//! Core domain entities.
//!
//! Entities are plain data structures. Each persisted entity has a separate
//! `New*` struct carrying exactly the fields supplied on insert; ids and
//! creation timestamps are generated by the datastore.
//!
//! # Entity Types
//!
//! - [`Category`] - Post grouping with a display color
//! - [`Tag`] - Free-form label
//! - [`Post`] - Blog post with publication status
//! - [`Session`] / [`Identity`] - Authenticated session and its user

pub mod category;
pub mod post;
pub mod session;
pub mod tag;

pub use category::{Category, DEFAULT_CATEGORY_COLOR, NewCategory};
pub use post::{
    NewPost, Post, PostCategory, PostListItem, PostStatus, PostSubmission, UNCATEGORIZED,
};
pub use session::{Identity, NewSession, Session};
pub use tag::{NewTag, Tag};
