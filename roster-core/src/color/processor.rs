//! Decode, downscale, vote, and style. Everything here is synchronous and
//! CPU-bound; the extractor runs it on the blocking pool.

use image::{DynamicImage, RgbaImage, imageops::FilterType};
use roster_model::{Paint, Rgb};

use super::{
    ColorError, ColorScheme, ExtractOptions, contrast::contrast_text_color,
    hsl::darken, quantize::dominant_color,
};
use crate::constants::color::GRADIENT_DARKEN;

/// Decode encoded image bytes and derive a color scheme from them.
pub fn scheme_from_bytes(
    data: &[u8],
    options: &ExtractOptions,
) -> Result<ColorScheme, ColorError> {
    let image = image::load_from_memory(data)
        .map_err(|e| ColorError::ImageLoad(e.to_string()))?;
    let raster = downscale(&image, options.normalized().max_dimension)?;
    Ok(scheme_from_raster(&raster, options))
}

/// Fit the image inside `max_dimension` on its longest edge, keeping the
/// aspect ratio. Images already small enough keep their exact pixels.
pub fn downscale(
    image: &DynamicImage,
    max_dimension: u32,
) -> Result<RgbaImage, ColorError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ColorError::PixelRead(format!(
            "image has no pixels ({width}x{height})"
        )));
    }

    let (target_w, target_h) = scaled_size(width, height, max_dimension);
    let raster = image.to_rgba8();
    if (target_w, target_h) == (width, height) {
        return Ok(raster);
    }
    Ok(image::imageops::resize(
        &raster,
        target_w,
        target_h,
        FilterType::Triangle,
    ))
}

/// Target size after fitting into `max_dimension`; at least 1px per axis.
pub fn scaled_size(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let longest = width.max(height).max(1);
    let scale = (f64::from(max_dimension.max(1)) / f64::from(longest)).min(1.0);
    let fit = |edge: u32| ((f64::from(edge) * scale).round() as u32).max(1);
    (fit(width), fit(height))
}

/// Style an already-sampled raster. A raster with no opaque pixels yields a
/// flat neutral gray.
pub fn scheme_from_raster(raster: &RgbaImage, options: &ExtractOptions) -> ColorScheme {
    let Some(dominant) = dominant_color(raster, options) else {
        return ColorScheme {
            dominant: Rgb::NEUTRAL_GRAY,
            background: Paint::solid(Rgb::NEUTRAL_GRAY),
            text_color: contrast_text_color(Rgb::NEUTRAL_GRAY),
        };
    };

    let background = if options.as_gradient {
        Paint::vertical(dominant, darken(dominant, GRADIENT_DARKEN))
    } else {
        Paint::solid(dominant)
    };

    ColorScheme {
        dominant,
        background,
        text_color: contrast_text_color(dominant),
    }
}
