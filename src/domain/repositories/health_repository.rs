//! Datastore liveness probe.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Performs a trivial round trip to the datastore.
    async fn ping(&self) -> Result<(), AppError>;
}
