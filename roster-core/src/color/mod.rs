//! Dominant color extraction
//!
//! Turns an item's artwork into a card style: the most common color of the
//! image (after coarse quantization) becomes the background, optionally as a
//! top-to-bottom gradient into a darker shade, and the text color is picked
//! for contrast. The pipeline is Loader → Processor, with results memoized by
//! the [`ColorExtractor`].

use roster_model::{ItemStyle, Paint, Rgb};
use thiserror::Error;

use crate::constants::color as defaults;

pub mod contrast;
pub mod extractor;
pub mod hsl;
pub mod loader;
pub mod processor;
pub mod quantize;

pub use contrast::{contrast_text_color, relative_luminance};
pub use extractor::ColorExtractor;
pub use hsl::darken;
pub use loader::{HttpImageLoader, ImageLoader};
pub use processor::{scheme_from_bytes, scheme_from_raster};
pub use quantize::dominant_color;

/// Errors that can occur while extracting a color scheme
#[derive(Debug, Error)]
pub enum ColorError {
    /// The resource could not be fetched, was refused, or did not decode.
    #[error("Image load error: {0}")]
    ImageLoad(String),

    /// The decoded image exposes no readable pixels.
    #[error("Pixel read error: {0}")]
    PixelRead(String),

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

/// Tuning for a single extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtractOptions {
    /// Longest edge after downscaling. Images are never upscaled.
    pub max_dimension: u32,
    /// Pixel stride on both axes; larger is faster and coarser.
    pub sample_step: u32,
    /// Bits kept per channel when bucketing.
    pub quant_bits: u8,
    /// Emit a two-stop gradient instead of a flat color.
    pub as_gradient: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_dimension: defaults::MAX_DIMENSION,
            sample_step: defaults::SAMPLE_STEP,
            quant_bits: defaults::QUANT_BITS,
            as_gradient: true,
        }
    }
}

impl ExtractOptions {
    /// Clamp degenerate values into their working ranges.
    pub fn normalized(self) -> Self {
        Self {
            max_dimension: self.max_dimension.max(1),
            sample_step: self.sample_step.max(1),
            quant_bits: self.quant_bits.clamp(1, 8),
            as_gradient: self.as_gradient,
        }
    }
}

/// Outcome of a successful extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub dominant: Rgb,
    pub background: Paint,
    pub text_color: Rgb,
}

impl ColorScheme {
    pub fn style(&self) -> ItemStyle {
        ItemStyle::new(self.background, self.text_color)
    }
}

/// Caller-side failure policy: log and fall back to the default card style.
pub fn style_or_fallback(
    image_url: &str,
    result: Result<ColorScheme, ColorError>,
) -> ItemStyle {
    match result {
        Ok(scheme) => scheme.style(),
        Err(e) => {
            tracing::warn!(url = image_url, error = %e, "color extraction failed, using fallback style");
            ItemStyle::fallback()
        }
    }
}
