//! Compiled defaults
//!
//! Tuning happens here so the extractor, the carousel, and the host agree on
//! the same numbers. Hosts override individual values through their runtime
//! configuration.

/// Carousel geometry and timing.
pub mod carousel {
    /// Width of one card (and one step), in pixels.
    pub const ITEM_WIDTH: f32 = 256.0;
    /// Padding before the first and after the last card.
    pub const LEADING_PADDING: f32 = 32.0;
    /// Default viewport width for hosts that cannot measure one.
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    /// Distance from either scroll edge, in cards, that triggers a wrap jump.
    pub const THRESHOLD_ITEMS: f32 = 2.0;
    /// Scroll reports inside this window after a wrap jump are not evaluated.
    pub const JUMP_SUPPRESS_MS: u64 = 50;
    /// Expand transition length; the overlay engages once it has elapsed.
    pub const OPEN_SETTLE_MS: u64 = 500;
    /// Smooth-scroll duration for a one-card step or a recenter.
    pub const STEP_DURATION_MS: u64 = 180;
    /// Render-ahead margin on each side of the viewport, in pixels.
    pub const OVERSCAN_PX: f32 = 1500.0;
}

/// Dominant color extraction.
pub mod color {
    /// Longest edge of the sampled raster.
    pub const MAX_DIMENSION: u32 = 200;
    /// Pixel stride on both axes.
    pub const SAMPLE_STEP: u32 = 2;
    /// Bits kept per channel when bucketing (4 => 4096 buckets).
    pub const QUANT_BITS: u8 = 4;
    /// Pixels with alpha below this do not vote.
    pub const ALPHA_CUTOFF: u8 = 200;
    /// HSL lightness removed for the second gradient stop.
    pub const GRADIENT_DARKEN: f64 = 0.22;
    /// Luminance above which text is drawn black.
    pub const LUMINANCE_THRESHOLD: f64 = 0.5;
    /// Images extracted concurrently by batch enrichment.
    pub const ENRICH_CONCURRENCY: usize = 8;
}

/// Detail panel rendering.
pub mod detail {
    /// Base value that fills a stat track completely.
    pub const STAT_TRACK_MAX: f32 = 130.0;
    /// Moves listed before the "+N more" line.
    pub const MOVES_SHOWN: usize = 20;
}

/// Remote catalog.
pub mod api {
    pub const BASE_URL: &str = "https://pokeapi.co/api/v2";
    /// The listing is fetched in one page.
    pub const CATALOG_LIMIT: u32 = 100_000;
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
