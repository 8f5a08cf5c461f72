//! Remote catalog access.

pub mod client;
pub mod details;

pub use client::PokeApiClient;
pub use details::DetailCache;

use async_trait::async_trait;
use roster_model::{CatalogPage, DisplayItem, ImageUrlTemplate, ItemDetails, ItemId, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Details for {id} unavailable: {reason}")]
    DetailFetch { id: ItemId, reason: String },

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Where catalog listings and per-item details come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CatalogPage, CatalogError>;

    async fn fetch_details(&self, id: &ItemId) -> Result<ItemDetails, CatalogError>;
}

/// Fetch the listing and turn it into display items. Entries whose URL has
/// no usable id are skipped.
pub async fn load_catalog<S>(
    source: &S,
    template: &ImageUrlTemplate,
) -> Result<Vec<DisplayItem>, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let page = source.fetch_catalog().await?;
    let total = page.results.len();

    let items: Vec<DisplayItem> = page
        .results
        .iter()
        .filter_map(|entry| match DisplayItem::from_entry(entry, template) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(name = %entry.name, url = %entry.url, "skipping catalog entry: {e}");
                None
            }
        })
        .collect();

    tracing::info!(loaded = items.len(), total, "catalog loaded");
    Ok(items)
}
