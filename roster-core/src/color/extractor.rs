//! Extraction entry point with an in-memory result cache.

use std::sync::Arc;

use dashmap::DashMap;
use futures::{StreamExt, stream};
use roster_model::DisplayItem;

use super::{
    ColorError, ColorScheme, ExtractOptions, ImageLoader, processor::scheme_from_bytes,
    style_or_fallback,
};

/// Loads artwork and derives card colors from it.
///
/// Successful results are memoized per `(url, options)` for the lifetime of
/// the extractor. Failures are not cached, so a later view may try again.
pub struct ColorExtractor<L: ?Sized = dyn ImageLoader> {
    loader: Arc<L>,
    cache: DashMap<(String, ExtractOptions), ColorScheme>,
}

impl<L: ?Sized> std::fmt::Debug for ColorExtractor<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorExtractor")
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl<L: ImageLoader + ?Sized> ColorExtractor<L> {
    pub fn new(loader: Arc<L>) -> Self {
        Self {
            loader,
            cache: DashMap::new(),
        }
    }

    /// Extract the color scheme of the image at `image_url`.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub async fn extract(
        &self,
        image_url: &str,
        options: ExtractOptions,
    ) -> Result<ColorScheme, ColorError> {
        let options = options.normalized();
        let key = (image_url.to_string(), options);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(*hit);
        }

        let data = self.loader.load(image_url).await?;

        // Decode and sampling are CPU-bound; keep them off the event loop.
        let scheme = tokio::task::spawn_blocking(move || scheme_from_bytes(&data, &options))
            .await
            .map_err(|e| ColorError::Worker(e.to_string()))??;

        tracing::debug!(dominant = %scheme.dominant, "extracted color scheme");
        self.cache.insert(key, scheme);
        Ok(scheme)
    }

    /// Style every item, at most `concurrency` extractions in flight.
    /// Failed items get the fallback style; order is preserved.
    pub async fn enrich(
        &self,
        items: &[DisplayItem],
        options: ExtractOptions,
        concurrency: usize,
    ) -> Vec<DisplayItem> {
        stream::iter(items)
            .map(|item| async move {
                let result = self.extract(item.image_url(), options).await;
                item.with_style(style_or_fallback(item.image_url(), result))
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    pub fn cached(&self, image_url: &str, options: ExtractOptions) -> Option<ColorScheme> {
        self.cache
            .get(&(image_url.to_string(), options.normalized()))
            .map(|hit| *hit)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
