use serde::Deserialize;

use shopfront_admin::NewAdminProduct;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAdminProductRequest {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl CreateAdminProductRequest {
    pub fn into_record(self) -> NewAdminProduct {
        NewAdminProduct {
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
        }
    }
}
