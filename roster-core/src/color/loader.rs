//! Image byte loaders

use std::time::Duration;

use reqwest::Client;

use super::ColorError;
use crate::constants::api::REQUEST_TIMEOUT_SECS;

/// Source of encoded image bytes.
#[async_trait::async_trait]
pub trait ImageLoader: Send + Sync {
    /// Fetch the encoded bytes behind `url`.
    async fn load(&self, url: &str) -> Result<Vec<u8>, ColorError>;

    /// Check if a URL is supported by this loader
    fn supports_url(&self, url: &str) -> bool;
}

/// HTTP image loader. A refused or failed request is a load error; there is
/// no retry.
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new() -> Result<Self, ColorError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ColorError> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .timeout(timeout)
            .build()
            .map_err(|e| ColorError::ImageLoad(format!("http client: {e}")))?;
        Ok(Self { client })
    }

    /// Share an existing client (and its connection pool).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<Vec<u8>, ColorError> {
        if !self.supports_url(url) {
            return Err(ColorError::ImageLoad(format!("unsupported url: {url}")));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ColorError::ImageLoad(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ColorError::ImageLoad(format!("HTTP {status}: {url}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ColorError::ImageLoad(e.to_string()))?;

        tracing::trace!(url, bytes = bytes.len(), "image downloaded");
        Ok(bytes.to_vec())
    }

    fn supports_url(&self, url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_non_http_urls_without_a_request() {
        let loader = HttpImageLoader::new().unwrap();
        assert!(!loader.supports_url("file:///etc/passwd"));

        let err = loader.load("data:image/png;base64,AAAA").await.unwrap_err();
        assert!(matches!(err, ColorError::ImageLoad(_)));
    }
}
