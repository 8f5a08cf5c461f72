//! Bucket voting over a sampled raster.

use std::collections::HashMap;

use image::RgbaImage;
use roster_model::Rgb;

use super::ExtractOptions;
use crate::constants::color::ALPHA_CUTOFF;

/// Pack the top `bits` of each channel into one key.
pub fn quant_key(r: u8, g: u8, b: u8, bits: u8) -> u32 {
    let shift = 8 - bits;
    let (r, g, b) = (
        u32::from(r >> shift),
        u32::from(g >> shift),
        u32::from(b >> shift),
    );
    (r << (bits * 2)) | (g << bits) | b
}

/// Votes for one bucket, with sums of the unquantized channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BucketTally {
    count: u64,
    r: u64,
    g: u64,
    b: u64,
}

impl BucketTally {
    fn add(&mut self, r: u8, g: u8, b: u8) {
        self.count += 1;
        self.r += u64::from(r);
        self.g += u64::from(g);
        self.b += u64::from(b);
    }

    fn mean(&self) -> Rgb {
        let avg = |sum: u64| {
            (sum as f64 / self.count as f64).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(avg(self.r), avg(self.g), avg(self.b))
    }
}

/// Mean color of the most populated bucket, or `None` when every sampled
/// pixel is transparent. Ties go to the bucket seen first in row-major
/// sampling order.
pub fn dominant_color(raster: &RgbaImage, options: &ExtractOptions) -> Option<Rgb> {
    let options = options.normalized();
    let step = options.sample_step as usize;

    // Buckets in first-seen order, plus a key lookup into that list.
    let mut tallies: Vec<BucketTally> = Vec::new();
    let mut slots: HashMap<u32, usize> = HashMap::new();

    for y in (0..raster.height()).step_by(step) {
        for x in (0..raster.width()).step_by(step) {
            let [r, g, b, a] = raster.get_pixel(x, y).0;
            if a < ALPHA_CUTOFF {
                continue;
            }
            let key = quant_key(r, g, b, options.quant_bits);
            let slot = *slots.entry(key).or_insert_with(|| {
                tallies.push(BucketTally::default());
                tallies.len() - 1
            });
            tallies[slot].add(r, g, b);
        }
    }

    let mut best: Option<&BucketTally> = None;
    for tally in &tallies {
        if best.is_none_or(|current| tally.count > current.count) {
            best = Some(tally);
        }
    }
    best.map(BucketTally::mean)
}
