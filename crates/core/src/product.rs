use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Product identifier, unique across the merged catalog.
///
/// Feed products arrive with small integer ids; admin-authored products are
/// allocated from a disjoint range (see `shopfront-admin`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s
            .parse()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

/// Where a product in the merged catalog came from. Never mutated after merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// External product feed.
    Catalog,
    /// Admin-authored listing.
    Admin,
}

/// Customer review aggregate: average rate in `[0, 5]` plus review count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Rating {
    /// Synthetic rating for listings with no review data.
    pub fn zero() -> Self {
        Self { rate: 0.0, count: 0 }
    }
}

/// A sellable item in the merged catalog.
///
/// Immutable snapshot: feed products are fetched per request, admin products
/// are mapped in at merge time. Construction goes through the validating
/// boundaries (`shopfront-feed`, `shopfront-admin`); nothing in the core
/// handles unvalidated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Non-negative and finite; enforced at the source boundary.
    pub price: f64,
    pub image: String,
    pub rating: Option<Rating>,
    pub source: Provenance,
}
