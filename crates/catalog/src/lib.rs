//! `shopfront-catalog` — the merged storefront catalog.
//!
//! Two product sources feed one addressable list: admin-authored listings
//! surface first, external feed products follow, and every item carries a
//! provenance tag. On top of the merged list sits the filter/paginate engine
//! that derives the page a shopper actually sees.

pub mod filter;
pub mod merge;
pub mod source;

pub use filter::{Browser, FilterState, PAGE_SIZE, PageView, apply_filters, paginate};
pub use merge::{admin_to_product, merge_catalog, merge_products};
pub use source::{AdminStoreSource, MergedCatalog, ProductSource, SourceError};
