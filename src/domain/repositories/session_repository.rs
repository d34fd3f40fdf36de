//! Repository trait for session storage.

use crate::domain::entities::{NewSession, Session};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for sessions.
///
/// Sessions are looked up by the HMAC hash of their bearer token; raw tokens
/// never reach this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a session with the same token hash exists.
    /// Returns [`AppError::Internal`] on datastore errors.
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError>;

    /// Finds a non-revoked session by token hash.
    async fn find_active(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Records that the session was just used.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Revokes the active session with this token hash.
    ///
    /// Returns `false` if no active session matched.
    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Revokes the active session with this id.
    ///
    /// Returns `false` if no active session matched.
    async fn revoke_by_id(&self, id: Uuid) -> Result<bool, AppError>;

    /// Lists all sessions, newest first.
    async fn list(&self) -> Result<Vec<Session>, AppError>;
}
