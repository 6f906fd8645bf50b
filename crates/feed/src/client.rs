//! HTTP client for the FakeStore-compatible product feed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use shopfront_catalog::{ProductSource, SourceError};
use shopfront_core::{Product, ProductId};

use crate::record::FeedProduct;

/// Public FakeStore API, the default upstream.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Featured listings show the first products of the feed.
const FEATURED_LIMIT: usize = 8;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure talking to or understanding the feed.
///
/// No automatic retry here; callers surface the failure and decide.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid feed base URL: {0}")]
    BaseUrl(String),

    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed returned status {0}")]
    Status(StatusCode),

    #[error("feed record {id} is invalid: {reason}")]
    Invalid { id: u64, reason: String },
}

/// Client for the external product feed.
///
/// Cheap to clone (shares the underlying connection pool).
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: Url,
}

impl FeedClient {
    /// Build a client against `base_url` (e.g. `https://fakestoreapi.com`).
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FeedError::BaseUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .user_agent("shopfront/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FeedError> {
        self.base_url
            .join(path)
            .map_err(|e| FeedError::BaseUrl(format!("{path}: {e}")))
    }

    /// Every product the feed serves, validated into the strict shape.
    #[instrument(skip(self), err)]
    pub async fn list_products(&self) -> Result<Vec<Product>, FeedError> {
        let url = self.endpoint("/products")?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let records: Vec<FeedProduct> = response.json().await?;
        records.into_iter().map(FeedProduct::into_product).collect()
    }

    /// The first feed products, for the storefront's featured strip.
    #[instrument(skip(self), err)]
    pub async fn featured_products(&self) -> Result<Vec<Product>, FeedError> {
        let mut url = self.endpoint("/products")?;
        url.query_pairs_mut()
            .append_pair("limit", &FEATURED_LIMIT.to_string());

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let records: Vec<FeedProduct> = response.json().await?;
        records
            .into_iter()
            .take(FEATURED_LIMIT)
            .map(FeedProduct::into_product)
            .collect()
    }

    /// Category names known to the feed.
    #[instrument(skip(self), err)]
    pub async fn list_categories(&self) -> Result<Vec<String>, FeedError> {
        let url = self.endpoint("/products/categories")?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// One product by id; `None` when the feed does not have it.
    #[instrument(skip(self), fields(id = %id), err)]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, FeedError> {
        let url = self.endpoint(&format!("/products/{id}"))?;
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let record: FeedProduct = response.json().await?;
        Ok(Some(record.into_product()?))
    }
}

#[async_trait]
impl ProductSource for FeedClient {
    async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
        FeedClient::list_products(self)
            .await
            .map_err(|e| SourceError::Feed(e.to_string()))
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, SourceError> {
        FeedClient::get_product(self, id)
            .await
            .map_err(|e| SourceError::Feed(e.to_string()))
    }
}
