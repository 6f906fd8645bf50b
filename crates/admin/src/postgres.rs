//! Postgres-backed admin store.
//!
//! Uses the sqlx connection pool (thread-safe, shared via clone). Ids are
//! assigned by an identity column starting at `ADMIN_ID_BASE` so the admin
//! id space stays disjoint from the external feed's.

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;
use uuid::Uuid;

use async_trait::async_trait;

use shopfront_core::{ProductId, UserId};

use crate::product::{AdminProduct, NewAdminProduct};
use crate::store::{AdminProductStore, StoreError};

#[derive(Debug, Clone)]
pub struct PostgresAdminStore {
    pool: PgPool,
}

impl PostgresAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist yet.
    ///
    /// Called once at startup; safe to call repeatedly.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS admin_products (
                id BIGINT GENERATED BY DEFAULT AS IDENTITY (START WITH 10000) PRIMARY KEY,
                title TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                image TEXT NOT NULL,
                created_by UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_product(row: &PgRow) -> Result<AdminProduct, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    let created_by: Uuid = row.try_get("created_by")?;

    Ok(AdminProduct {
        id: ProductId::new(id as u64),
        title: row.try_get("title")?,
        price: row.try_get("price")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        image: row.try_get("image")?,
        created_by: UserId::from_uuid(created_by),
        created_at: row.try_get("created_at")?,
    })
}

const SELECT_COLUMNS: &str =
    "id, title, price, description, category, image, created_by, created_at";

#[async_trait]
impl AdminProductStore for PostgresAdminStore {
    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<AdminProduct>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM admin_products ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| row_to_product(r).map_err(StoreError::from))
            .collect()
    }

    #[instrument(skip(self), fields(owner = %owner), err)]
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<AdminProduct>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM admin_products WHERE created_by = $1 ORDER BY id ASC"
        ))
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| row_to_product(r).map_err(StoreError::from))
            .collect()
    }

    #[instrument(skip(self, record), fields(owner = %owner), err)]
    async fn create(
        &self,
        record: NewAdminProduct,
        owner: UserId,
    ) -> Result<AdminProduct, StoreError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO admin_products (title, price, description, category, image, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&record.title)
        .bind(record.price)
        .bind(&record.description)
        .bind(&record.category)
        .bind(&record.image)
        .bind(owner.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_product(&row)?)
    }
}
