//! Session and identity entities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The authenticated user behind a session token.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub last_sign_in_at: DateTime<Utc>,
}

/// A stored session.
///
/// The raw bearer token is never stored; the datastore only holds its
/// HMAC-SHA256 hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// The identity this session authenticates.
    ///
    /// `last_sign_in_at` is the moment the session was opened.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.user_id,
            email: self.email.clone(),
            last_sign_in_at: self.created_at,
        }
    }
}

/// Input data for opening a session.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub user_id: Uuid,
    pub email: String,
    pub token_hash: String,
}
