//! Runtime configuration for user-adjustable constants
//!
//! [`RuntimeConfig`] holds `Option<T>` overrides for the compiled defaults in
//! `roster_core::constants`. Accessor methods fall back to the constants
//! when a field is `None`.

use roster_core::carousel::CarouselLayout;
use roster_core::color::ExtractOptions;
use roster_core::constants::{api, carousel, color};

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeConfig {
    // ========== CATALOG ==========
    /// Entries requested from the listing endpoint
    pub catalog_limit: Option<u32>,

    // ========== CAROUSEL ==========
    /// Card width and step distance (px)
    pub item_width: Option<f32>,
    /// Viewport width (px)
    pub viewport_width: Option<f32>,

    // ========== COLOR EXTRACTION ==========
    /// Longest edge of the sampled raster (px)
    pub max_dimension: Option<u32>,
    /// Pixel stride when sampling
    pub sample_step: Option<u32>,
    /// Bits kept per channel when bucketing
    pub quant_bits: Option<u8>,
    /// Flat backgrounds instead of gradients
    pub flat_background: Option<bool>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one override from its environment variable name. Unknown keys
    /// and unparsable values are logged and ignored. Returns whether the
    /// value was applied.
    pub fn apply(&mut self, key: &str, raw: &str) -> bool {
        let raw = raw.trim();
        let applied = match key {
            "ROSTER_CATALOG_LIMIT" => parse_into(raw, &mut self.catalog_limit, |v: &u32| *v > 0),
            "ROSTER_ITEM_WIDTH" => parse_into(raw, &mut self.item_width, |v: &f32| *v >= 1.0),
            "ROSTER_VIEWPORT_WIDTH" => {
                parse_into(raw, &mut self.viewport_width, |v: &f32| *v > 0.0)
            }
            "ROSTER_MAX_DIMENSION" => parse_into(raw, &mut self.max_dimension, |v: &u32| *v > 0),
            "ROSTER_SAMPLE_STEP" => parse_into(raw, &mut self.sample_step, |v: &u32| *v > 0),
            "ROSTER_QUANT_BITS" => {
                parse_into(raw, &mut self.quant_bits, |v: &u8| (1..=8).contains(v))
            }
            "ROSTER_FLAT_BACKGROUND" => match parse_flag(raw) {
                Some(flag) => {
                    self.flat_background = Some(flag);
                    true
                }
                None => false,
            },
            _ => {
                log::warn!("Unknown runtime setting {key}");
                return false;
            }
        };

        if !applied {
            log::warn!("Ignoring invalid value '{raw}' for {key}");
        }
        applied
    }

    // ========== CATALOG ACCESSORS ==========

    pub fn catalog_limit(&self) -> u32 {
        self.catalog_limit.unwrap_or(api::CATALOG_LIMIT)
    }

    // ========== CAROUSEL ACCESSORS ==========

    pub fn item_width(&self) -> f32 {
        self.item_width.unwrap_or(carousel::ITEM_WIDTH)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width.unwrap_or(carousel::VIEWPORT_WIDTH)
    }

    pub fn layout(&self) -> CarouselLayout {
        CarouselLayout::new(
            self.item_width(),
            self.viewport_width(),
            carousel::LEADING_PADDING,
        )
    }

    // ========== COLOR ACCESSORS ==========

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension.unwrap_or(color::MAX_DIMENSION)
    }

    pub fn sample_step(&self) -> u32 {
        self.sample_step.unwrap_or(color::SAMPLE_STEP)
    }

    pub fn quant_bits(&self) -> u8 {
        self.quant_bits.unwrap_or(color::QUANT_BITS)
    }

    pub fn flat_background(&self) -> bool {
        self.flat_background.unwrap_or(false)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            max_dimension: self.max_dimension(),
            sample_step: self.sample_step(),
            quant_bits: self.quant_bits(),
            as_gradient: !self.flat_background(),
        }
    }
}

fn parse_into<T: std::str::FromStr>(
    raw: &str,
    slot: &mut Option<T>,
    valid: impl Fn(&T) -> bool,
) -> bool {
    match raw.parse::<T>() {
        Ok(value) if valid(&value) => {
            *slot = Some(value);
            true
        }
        _ => false,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_fall_back_to_constants() {
        let config = RuntimeConfig::new();
        assert_eq!(config.item_width(), carousel::ITEM_WIDTH);
        assert_eq!(config.catalog_limit(), api::CATALOG_LIMIT);
        assert_eq!(config.extract_options(), ExtractOptions::default());
    }

    #[test]
    fn overrides_apply_and_invalid_values_are_ignored() {
        let mut config = RuntimeConfig::new();
        assert!(config.apply("ROSTER_VIEWPORT_WIDTH", " 384 "));
        assert!(config.apply("ROSTER_FLAT_BACKGROUND", "yes"));
        assert!(!config.apply("ROSTER_QUANT_BITS", "12"));
        assert!(!config.apply("ROSTER_ITEM_WIDTH", "wide"));
        assert!(!config.apply("ROSTER_UNKNOWN", "1"));

        assert_eq!(config.viewport_width(), 384.0);
        assert_eq!(config.quant_bits(), color::QUANT_BITS);
        assert!(!config.extract_options().as_gradient);
        assert_eq!(config.layout().viewport_width, 384.0);
    }
}
