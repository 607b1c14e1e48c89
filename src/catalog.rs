use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::query::QueryParams;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Search endpoint not found")]
    NotFound,
}

/// A single product as returned by the search service.
///
/// Only `id` is interpreted by the listing page (stable identity for list
/// rendering); everything else is display data passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub thumb: Option<String>,
}

/// One page of search results plus the total match count across all pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    pub data: Vec<Product>,
    #[serde(rename = "totalLength")]
    pub total_length: u64,
}

/// Anything that can search the product catalog. The listing page talks to
/// this seam only, so tests can substitute a stub for the HTTP client.
#[async_trait]
pub trait SearchCapability: Send + Sync {
    async fn search_items(&self, params: &QueryParams) -> Result<SearchPage, CatalogError>;
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SearchCapability for CatalogClient {
    /// Search for products matching the given query parameters. The parsed
    /// URL parameters are forwarded to the service verbatim.
    async fn search_items(&self, params: &QueryParams) -> Result<SearchPage, CatalogError> {
        let url = format!("{}/items/search", self.base_url);
        debug!(%url, "Searching catalog");

        let pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        let response = self
            .client
            .get(&url)
            .query(&pairs)
            .header("User-Agent", "shopfront/0.1")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else if response.status() == 429 {
            Err(CatalogError::RateLimit)
        } else if response.status() == 404 {
            Err(CatalogError::NotFound)
        } else {
            Err(CatalogError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }
}
