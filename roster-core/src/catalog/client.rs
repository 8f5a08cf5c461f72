use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use roster_model::{CatalogPage, ItemDetails, ItemId};
use serde::de::DeserializeOwned;
use url::Url;

use super::{CatalogError, CatalogSource};
use crate::constants::api;

/// PokeAPI-shaped catalog client.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Add a scheme when missing and drop trailing slashes, so that
/// "pokeapi.co/api/v2/" and "https://pokeapi.co/api/v2" build the same URLs.
pub fn normalize_base_url(raw: &str) -> Result<String, CatalogError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&with_scheme)
        .map_err(|e| CatalogError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(CatalogError::InvalidBaseUrl(raw.to_string()));
    }

    if with_scheme != raw {
        tracing::warn!("Normalized base URL from '{raw}' to '{with_scheme}'");
    }
    Ok(with_scheme)
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        Self::with_limit(base_url, api::CATALOG_LIMIT)
    }

    pub fn with_limit(base_url: &str, limit: u32) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CatalogError::Network(format!("http client: {e}")))?;
        Self::with_client(client, base_url, limit)
    }

    /// Share an existing client (and its connection pool).
    pub fn with_client(client: Client, base_url: &str, limit: u32) -> Result<Self, CatalogError> {
        let base_url = normalize_base_url(base_url)?;
        tracing::info!(%base_url, limit, "creating catalog client");
        Ok(Self {
            client,
            base_url,
            limit: limit.max(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}&offset=0", self.base_url, self.limit)
    }

    pub fn details_url(&self, id: &ItemId) -> String {
        format!("{}/pokemon/{}/", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch_catalog(&self) -> Result<CatalogPage, CatalogError> {
        let url = self.catalog_url();
        let page: CatalogPage = self.get_json(&url).await?;
        tracing::debug!(entries = page.results.len(), "catalog page received");
        Ok(page)
    }

    #[tracing::instrument(level = "debug", skip(self, id), fields(id = %id))]
    async fn fetch_details(&self, id: &ItemId) -> Result<ItemDetails, CatalogError> {
        let url = self.details_url(id);
        self.get_json(&url)
            .await
            .map_err(|e| CatalogError::DetailFetch {
                id: id.clone(),
                reason: e.to_string(),
            })
    }
}
