//! `shopfront-feed` — client for the external product feed.
//!
//! The feed is the read-only half of the catalog: a FakeStore-compatible
//! JSON API serving products and categories. Responses cross a
//! parse-and-validate boundary here, so the rest of the system only ever
//! sees the strict `Product` type.

pub mod client;
pub mod record;

pub use client::{DEFAULT_BASE_URL, FeedClient, FeedError};
pub use record::{FeedProduct, FeedRating};
