//! `shopfront-admin` — admin-authored product listings.
//!
//! Admin listings are plain CRUD records layered on top of the external feed:
//! created through the admin form, owned by the creating user, and merged
//! into the storefront catalog ahead of feed products. This crate owns the
//! record shape, its field-addressed validation, and the persistence boundary
//! (`AdminProductStore`) with an in-memory and a Postgres implementation.

pub mod in_memory;
pub mod postgres;
pub mod product;
pub mod store;

pub use in_memory::InMemoryAdminStore;
pub use postgres::PostgresAdminStore;
pub use product::{AdminProduct, FieldError, NewAdminProduct, ValidationErrors, ADMIN_ID_BASE};
pub use store::{AdminProductStore, StoreError};
