//! In-memory admin store (dev/test wiring).

use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;

use shopfront_core::{ProductId, UserId};

use crate::product::{ADMIN_ID_BASE, AdminProduct, NewAdminProduct};
use crate::store::{AdminProductStore, StoreError};

/// Mutex-guarded vector of listings with a monotonic id counter.
///
/// Insertion order doubles as creation order, so `list` needs no sort.
#[derive(Debug)]
pub struct InMemoryAdminStore {
    items: Mutex<Vec<AdminProduct>>,
    next_id: AtomicU64,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(ADMIN_ID_BASE),
        }
    }
}

impl Default for InMemoryAdminStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminProductStore for InMemoryAdminStore {
    async fn list(&self) -> Result<Vec<AdminProduct>, StoreError> {
        Ok(self.items.lock().expect("admin store poisoned").clone())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<AdminProduct>, StoreError> {
        Ok(self
            .items
            .lock()
            .expect("admin store poisoned")
            .iter()
            .filter(|p| p.created_by == owner)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        record: NewAdminProduct,
        owner: UserId,
    ) -> Result<AdminProduct, StoreError> {
        let id = ProductId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let product = AdminProduct {
            id,
            title: record.title,
            price: record.price,
            description: record.description,
            category: record.category,
            image: record.image,
            created_by: owner,
            created_at: Utc::now(),
        };

        self.items
            .lock()
            .expect("admin store poisoned")
            .push(product.clone());
        Ok(product)
    }
}
