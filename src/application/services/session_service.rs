//! Session token service and the request-scoped session provider.

use async_trait::async_trait;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::domain::entities::{Identity, NewSession, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes per session token, before base64 encoding.
const TOKEN_BYTES: usize = 32;

/// Supplies the identity of whoever is making the current request.
///
/// Passed explicitly into operations that attribute their work to a user,
/// such as post creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in identity, or `None` for anonymous requests.
    async fn current_identity(&self) -> Result<Option<Identity>, AppError>;
}

/// A freshly opened session together with its raw bearer token.
///
/// The token is only available here; the datastore keeps its hash.
#[derive(Debug, Clone)]
pub struct OpenedSession {
    pub token: String,
    pub session: Session,
}

/// Service for opening, resolving and revoking bearer-token sessions.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before they
/// are stored or looked up, so the datastore alone cannot be used to forge
/// or verify a token.
pub struct SessionService<R: SessionRepository + ?Sized> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: SessionRepository + ?Sized> SessionService<R> {
    /// Creates a new session service.
    ///
    /// `signing_secret` must match the value used when the sessions were opened.
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Returns a 64-character lowercase hex HMAC of the raw token.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Resolves a raw token to the identity of its active session.
    ///
    /// Records the use on success; a failure to record it is not an error.
    pub async fn resolve(&self, token: &str) -> Result<Option<Identity>, AppError> {
        let token_hash = self.hash_token(token);

        let Some(session) = self.repository.find_active(&token_hash).await? else {
            return Ok(None);
        };

        if let Err(e) = self.repository.touch(&token_hash).await {
            debug!(error = %e, session_id = %session.id, "Failed to record session use");
        }

        Ok(Some(session.identity()))
    }

    /// Revokes the session a raw token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token matches no active session.
    /// Returns [`AppError::Internal`] on datastore errors.
    pub async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(token);

        if !self.repository.revoke(&token_hash).await? {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        }

        info!("Session signed out");
        Ok(())
    }

    /// Opens a session for `email`, generating a new random token.
    ///
    /// A fresh user id is assigned when `user_id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `email` is not a valid address.
    /// Returns [`AppError::Internal`] on datastore errors.
    pub async fn open_session(
        &self,
        email: String,
        user_id: Option<Uuid>,
    ) -> Result<OpenedSession, AppError> {
        if !email.validate_email() {
            return Err(AppError::bad_request(
                "Invalid email address",
                json!({"email": email}),
            ));
        }

        let token = generate_token();
        let session = self
            .repository
            .create(NewSession {
                user_id: user_id.unwrap_or_else(Uuid::new_v4),
                email,
                token_hash: self.hash_token(&token),
            })
            .await?;

        info!(session_id = %session.id, user_id = %session.user_id, "Session opened");
        Ok(OpenedSession { token, session })
    }

    /// Lists all sessions, newest first, including revoked ones.
    pub async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        self.repository.list().await
    }

    /// Revokes a session by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active session has this id.
    pub async fn revoke_session(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.revoke_by_id(id).await? {
            return Err(AppError::not_found(
                "Active session not found",
                json!({"id": id}),
            ));
        }

        info!(session_id = %id, "Session revoked");
        Ok(())
    }

    /// Binds the bearer token of one request to this service.
    pub fn for_request(&self, token: Option<String>) -> RequestSession<'_, R> {
        RequestSession {
            service: self,
            token,
        }
    }
}

/// Session provider for a single request, holding its bearer token if any.
pub struct RequestSession<'a, R: SessionRepository + ?Sized> {
    service: &'a SessionService<R>,
    token: Option<String>,
}

#[async_trait]
impl<R: SessionRepository + ?Sized> SessionProvider for RequestSession<'_, R> {
    async fn current_identity(&self) -> Result<Option<Identity>, AppError> {
        match &self.token {
            Some(token) => self.service.resolve(token).await,
            None => Ok(None),
        }
    }
}

/// Generates a URL-safe session token with 256 bits of entropy.
fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
