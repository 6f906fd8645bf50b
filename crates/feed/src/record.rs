//! Raw feed records and the validation boundary into the strict model.

use serde::Deserialize;

use shopfront_core::{Product, ProductId, Provenance, Rating};

use crate::client::FeedError;

/// Review aggregate as the feed serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRating {
    pub rate: f64,
    pub count: u64,
}

/// A product record as the feed serves it, before validation.
///
/// The upstream API has no compile-time contract, so this shape is lenient
/// where the feed has been observed to be (missing description/image/rating)
/// and the strictness lives in [`FeedProduct::into_product`].
#[derive(Debug, Clone, Deserialize)]
pub struct FeedProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub rating: Option<FeedRating>,
}

impl FeedProduct {
    /// Validate the record and convert it into the strict product shape.
    ///
    /// Rejects non-finite or negative prices and ratings outside `[0, 5]`;
    /// an invalid record fails the whole fetch rather than slipping through
    /// half-validated.
    pub fn into_product(self) -> Result<Product, FeedError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(FeedError::Invalid {
                id: self.id,
                reason: format!("price {} is not a non-negative number", self.price),
            });
        }

        let rating = match self.rating {
            Some(r) => {
                if !r.rate.is_finite() || !(0.0..=5.0).contains(&r.rate) {
                    return Err(FeedError::Invalid {
                        id: self.id,
                        reason: format!("rating rate {} is outside 0..=5", r.rate),
                    });
                }
                Some(Rating {
                    rate: r.rate,
                    count: r.count,
                })
            }
            None => None,
        };

        Ok(Product {
            id: ProductId::new(self.id),
            title: self.title,
            description: self.description,
            category: self.category,
            price: self.price,
            image: self.image,
            rating,
            source: Provenance::Catalog,
        })
    }
}
