//! Catalog merge: one unified product list from two disjoint sources.

use shopfront_admin::AdminProduct;
use shopfront_core::{Product, Provenance, Rating};

/// Map an admin listing into the catalog product shape.
///
/// Admin listings carry no review data, so a zero rating is synthesized.
pub fn admin_to_product(record: AdminProduct) -> Product {
    Product {
        id: record.id,
        title: record.title,
        description: record.description,
        category: record.category,
        price: record.price,
        image: record.image,
        rating: Some(Rating::zero()),
        source: Provenance::Admin,
    }
}

/// Merge already-mapped product lists, enforcing provenance tags.
///
/// Admin items come first: admin-authored listings are surfaced ahead of the
/// feed in every listing. Order within each source is preserved. No
/// cross-source dedup happens here; the id spaces are disjoint by
/// construction (`shopfront_admin::ADMIN_ID_BASE`).
pub fn merge_products(admin: Vec<Product>, feed: Vec<Product>) -> Vec<Product> {
    let mut merged = Vec::with_capacity(admin.len() + feed.len());
    merged.extend(admin.into_iter().map(|mut p| {
        p.source = Provenance::Admin;
        p
    }));
    merged.extend(feed.into_iter().map(|mut p| {
        p.source = Provenance::Catalog;
        p
    }));
    merged
}

/// Merge raw admin records with feed products.
pub fn merge_catalog(admin: Vec<AdminProduct>, feed: Vec<Product>) -> Vec<Product> {
    merge_products(admin.into_iter().map(admin_to_product).collect(), feed)
}
