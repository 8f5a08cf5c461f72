use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use roster_core::color::{
    ColorError, ColorExtractor, ExtractOptions, ImageLoader, contrast_text_color,
};
use roster_model::{CatalogEntry, DisplayItem, ImageUrlTemplate, ItemStyle, Paint, Rgb};

/// Serves PNGs from memory and counts loads.
#[derive(Default)]
struct FakeLoader {
    images: HashMap<String, Vec<u8>>,
    loads: AtomicUsize,
}

impl FakeLoader {
    fn with_image(mut self, url: &str, image: RgbaImage) -> Self {
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        self.images.insert(url.to_string(), png);
        self
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageLoader for FakeLoader {
    async fn load(&self, url: &str) -> Result<Vec<u8>, ColorError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| ColorError::ImageLoad(format!("HTTP 404 Not Found: {url}")))
    }

    fn supports_url(&self, _url: &str) -> bool {
        true
    }
}

/// 10x10 with the left six columns red and the right four blue.
fn red_majority() -> RgbaImage {
    RgbaImage::from_fn(10, 10, |x, _| {
        if x < 6 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    })
}

#[tokio::test]
async fn larger_region_wins_and_darkens_into_a_gradient() {
    let loader = FakeLoader::default().with_image("mem://split.png", red_majority());
    let extractor = ColorExtractor::new(Arc::new(loader));

    let scheme = extractor
        .extract("mem://split.png", ExtractOptions::default())
        .await
        .unwrap();

    assert_eq!(scheme.dominant, Rgb::new(255, 0, 0));
    assert_eq!(
        scheme.background.to_string(),
        "linear-gradient(180deg, #ff0000 0%, #8f0000 100%)"
    );
    assert_eq!(scheme.text_color, Rgb::WHITE);
}

#[tokio::test]
async fn fully_transparent_image_is_neutral_gray() {
    let clear = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]));
    let loader = FakeLoader::default().with_image("mem://clear.png", clear);
    let extractor = ColorExtractor::new(Arc::new(loader));

    let scheme = extractor
        .extract("mem://clear.png", ExtractOptions::default())
        .await
        .unwrap();

    assert_eq!(scheme.dominant, Rgb::NEUTRAL_GRAY);
    assert_eq!(scheme.background, Paint::solid(Rgb::new(0x80, 0x80, 0x80)));
    assert_eq!(scheme.text_color, contrast_text_color(Rgb::NEUTRAL_GRAY));
}

#[tokio::test]
async fn cached_results_skip_the_loader() {
    let loader = Arc::new(FakeLoader::default().with_image("mem://split.png", red_majority()));
    let extractor = ColorExtractor::new(Arc::clone(&loader));
    let options = ExtractOptions::default();

    let first = extractor.extract("mem://split.png", options).await.unwrap();
    let second = extractor.extract("mem://split.png", options).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(loader.loads(), 1);

    // Different options are a different entry.
    let flat = ExtractOptions {
        as_gradient: false,
        ..options
    };
    let scheme = extractor.extract("mem://split.png", flat).await.unwrap();
    assert_eq!(scheme.background.to_string(), "#ff0000");
    assert_eq!(loader.loads(), 2);
    assert!(extractor.cached("mem://split.png", flat).is_some());
}

#[tokio::test]
async fn failures_are_retried_and_fall_back_when_enriching() {
    let loader = Arc::new(FakeLoader::default());
    let extractor = ColorExtractor::new(Arc::clone(&loader));

    let err = extractor
        .extract("mem://missing.png", ExtractOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ColorError::ImageLoad(_)));
    assert!(
        extractor
            .extract("mem://missing.png", ExtractOptions::default())
            .await
            .is_err()
    );
    assert_eq!(loader.loads(), 2);

    let template = ImageUrlTemplate::new("mem://art/{id}.png");
    let items: Vec<DisplayItem> = ["1", "2"]
        .iter()
        .map(|id| {
            let entry = CatalogEntry::new(
                format!("item-{id}"),
                format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
            );
            DisplayItem::from_entry(&entry, &template).unwrap()
        })
        .collect();

    let styled = extractor.enrich(&items, ExtractOptions::default(), 4).await;
    assert_eq!(styled.len(), 2);
    for (before, after) in items.iter().zip(&styled) {
        assert_eq!(before.id(), after.id());
        assert_eq!(after.style(), Some(&ItemStyle::fallback()));
    }
}

#[tokio::test]
async fn enrich_preserves_order_with_mixed_results() {
    let loader = FakeLoader::default()
        .with_image("mem://art/1.png", red_majority())
        .with_image(
            "mem://art/3.png",
            RgbaImage::from_pixel(4, 4, Rgba([250, 240, 230, 255])),
        );
    let extractor = ColorExtractor::new(Arc::new(loader));
    let template = ImageUrlTemplate::new("mem://art/{id}.png");
    let items: Vec<DisplayItem> = (1..=3)
        .map(|id| {
            let entry = CatalogEntry::new(
                format!("item-{id}"),
                format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
            );
            DisplayItem::from_entry(&entry, &template).unwrap()
        })
        .collect();

    let styled = extractor.enrich(&items, ExtractOptions::default(), 2).await;
    let texts: Vec<Rgb> = styled
        .iter()
        .map(|item| item.style_or_fallback().text_color)
        .collect();
    assert_eq!(texts, [Rgb::WHITE, Rgb::BLACK, Rgb::BLACK]);
    assert_eq!(styled[1].style(), Some(&ItemStyle::fallback()));
}
