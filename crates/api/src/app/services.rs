use std::sync::Arc;

use sqlx::PgPool;

use shopfront_admin::{AdminProductStore, InMemoryAdminStore, PostgresAdminStore};
use shopfront_catalog::{AdminStoreSource, MergedCatalog};
use shopfront_feed::FeedClient;

/// Shared service handles for request handlers.
///
/// One feed client and one admin store per process; the merged catalog
/// composes the two with admin precedence. Everything is cheap to share
/// behind the `Arc` that `build_app` wraps around this struct.
pub struct AppServices {
    feed: FeedClient,
    admin_store: Arc<dyn AdminProductStore>,
    catalog: MergedCatalog,
}

/// Wire the services from the environment.
///
/// `DATABASE_URL` set: admin products persist in Postgres. Unset: in-memory
/// store (dev/test).
pub async fn build_services(feed_base_url: &str) -> AppServices {
    let feed = FeedClient::new(feed_base_url).expect("invalid feed base URL");

    let admin_store: Arc<dyn AdminProductStore> = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPool::connect(&database_url)
                .await
                .expect("failed to connect to Postgres");
            let store = PostgresAdminStore::new(pool);
            store
                .ensure_schema()
                .await
                .expect("failed to prepare admin_products schema");
            Arc::new(store)
        }
        Err(_) => {
            tracing::info!("DATABASE_URL not set; using in-memory admin store");
            Arc::new(InMemoryAdminStore::new())
        }
    };

    let catalog = MergedCatalog::new(
        Arc::new(AdminStoreSource::new(admin_store.clone())),
        Arc::new(feed.clone()),
    );

    AppServices {
        feed,
        admin_store,
        catalog,
    }
}

impl AppServices {
    pub fn catalog(&self) -> &MergedCatalog {
        &self.catalog
    }

    pub fn feed(&self) -> &FeedClient {
        &self.feed
    }

    pub fn admin_store(&self) -> &Arc<dyn AdminProductStore> {
        &self.admin_store
    }
}
