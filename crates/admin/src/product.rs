use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use shopfront_core::{ProductId, UserId};

/// First id handed out to admin-authored listings.
///
/// The external feed uses small integer ids; allocating admin ids from here
/// keeps the two id spaces disjoint. Should they ever collide anyway, the
/// admin record wins: merge order and single-product lookup both consult the
/// admin store first.
pub const ADMIN_ID_BASE: u64 = 10_000;

const TITLE_MAX_LEN: usize = 200;
const DESCRIPTION_MIN_LEN: usize = 10;

/// A persisted admin-authored listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Creation record for an admin listing, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdminProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// One rejected field with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validation outcome naming every offending field.
///
/// Recoverable by the submitting form; never a process-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid admin product:")?;
        for e in &self.fields {
            write!(f, " {}: {};", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl NewAdminProduct {
    /// Check every field and report all violations at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut fields = Vec::new();

        if self.title.trim().is_empty() {
            fields.push(FieldError {
                field: "title",
                message: "title is required",
            });
        } else if self.title.chars().count() > TITLE_MAX_LEN {
            fields.push(FieldError {
                field: "title",
                message: "title must be at most 200 characters",
            });
        }

        // `> 0.0` is false for NaN, so a NaN price is rejected here too.
        if !(self.price > 0.0) || !self.price.is_finite() {
            fields.push(FieldError {
                field: "price",
                message: "price must be positive",
            });
        }

        if self.description.chars().count() < DESCRIPTION_MIN_LEN {
            fields.push(FieldError {
                field: "description",
                message: "description must be at least 10 characters",
            });
        }

        if self.category.trim().is_empty() {
            fields.push(FieldError {
                field: "category",
                message: "category is required",
            });
        }

        if Url::parse(&self.image).is_err() {
            fields.push(FieldError {
                field: "image",
                message: "image must be a valid URL",
            });
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { fields })
        }
    }
}
