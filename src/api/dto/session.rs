//! DTOs for session endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Identity;

#[derive(Debug, Serialize)]
pub struct IdentityItem {
    pub id: Uuid,
    pub email: String,
    pub last_sign_in_at: DateTime<Utc>,
}

impl From<Identity> for IdentityItem {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            last_sign_in_at: identity.last_sign_in_at,
        }
    }
}

/// Response for `GET /api/session`; `user` is `null` for anonymous requests.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<IdentityItem>,
}
