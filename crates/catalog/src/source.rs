//! The `ProductSource` capability: one read interface, two backends.
//!
//! The external feed and the admin store expose the same conceptual
//! operations (list the products, fetch one by id), so they share a trait
//! instead of duplicating lookup logic per backend. `MergedCatalog` composes
//! the two with the admin store taking precedence, matching the merge order.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use shopfront_admin::{AdminProductStore, StoreError};
use shopfront_core::{Product, ProductId};

use crate::merge::{admin_to_product, merge_products};

/// Failure while reading a product source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The external feed was unreachable or returned unusable data.
    #[error("feed failure: {0}")]
    Feed(String),

    /// The admin store's backend failed.
    #[error("storage failure: {0}")]
    Store(String),
}

impl From<StoreError> for SourceError {
    fn from(e: StoreError) -> Self {
        Self::Store(e.to_string())
    }
}

/// Read access to one origin of catalog products.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// All products this source knows, in its native order.
    async fn list_products(&self) -> Result<Vec<Product>, SourceError>;

    /// A single product by id, `None` when this source does not have it.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, SourceError>;
}

/// `ProductSource` over the admin store, mapping records into the product
/// shape at the boundary.
pub struct AdminStoreSource {
    store: Arc<dyn AdminProductStore>,
}

impl AdminStoreSource {
    pub fn new(store: Arc<dyn AdminProductStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductSource for AdminStoreSource {
    async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .map(admin_to_product)
            .collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, SourceError> {
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .map(admin_to_product))
    }
}

/// The unified storefront catalog: admin listings first, feed second.
///
/// Lookup precedence matches the merge order, so a shopper clicking through
/// from a listing always lands on the same record the listing showed.
pub struct MergedCatalog {
    admin: Arc<dyn ProductSource>,
    feed: Arc<dyn ProductSource>,
}

impl MergedCatalog {
    pub fn new(admin: Arc<dyn ProductSource>, feed: Arc<dyn ProductSource>) -> Self {
        Self { admin, feed }
    }

    /// The full merged product list.
    pub async fn list(&self) -> Result<Vec<Product>, SourceError> {
        let admin = self.admin.list_products().await?;
        let feed = self.feed.list_products().await?;
        Ok(merge_products(admin, feed))
    }

    /// Single-product lookup, admin store first.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, SourceError> {
        if let Some(product) = self.admin.get_product(id).await? {
            return Ok(Some(product));
        }
        self.feed.get_product(id).await
    }
}
