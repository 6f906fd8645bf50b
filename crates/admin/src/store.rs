//! Persistence boundary for admin listings.
//!
//! One capability, two backends: `InMemoryAdminStore` for dev/test and
//! `PostgresAdminStore` for deployments. Callers validate a
//! `NewAdminProduct` before handing it to `create`.

use async_trait::async_trait;
use thiserror::Error;

use shopfront_core::UserId;

use crate::product::{AdminProduct, NewAdminProduct};

/// Storage failure underneath the admin store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Read/write access to admin-authored listings.
#[async_trait]
pub trait AdminProductStore: Send + Sync {
    /// All admin listings, oldest first.
    async fn list(&self) -> Result<Vec<AdminProduct>, StoreError>;

    /// Listings created by `owner`, oldest first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<AdminProduct>, StoreError>;

    /// Persist a validated record, assigning its id and creation time.
    async fn create(
        &self,
        record: NewAdminProduct,
        owner: UserId,
    ) -> Result<AdminProduct, StoreError>;
}
