//! HSL conversions used to derive the darker gradient stop.

use roster_model::Rgb;

/// A color in HSL, every component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn from_rgb(color: Rgb) -> Self {
        let [r, g, b] = color.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let hue = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            hue: hue / 6.0,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let Self {
            hue,
            saturation: s,
            lightness: l,
        } = self;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_channel(hue_to_rgb(p, q, hue + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, hue)),
            to_channel(hue_to_rgb(p, q, hue - 1.0 / 3.0)),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Lower the HSL lightness by `amount`, floored at black.
pub fn darken(color: Rgb, amount: f64) -> Rgb {
    let hsl = Hsl::from_rgb(color);
    Hsl {
        lightness: (hsl.lightness - amount).max(0.0),
        ..hsl
    }
    .to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_primaries() {
        for color in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(120, 200, 80),
            Rgb::NEUTRAL_GRAY,
        ] {
            assert_eq!(Hsl::from_rgb(color).to_rgb(), color);
        }
    }

    #[test]
    fn darkening_keeps_hue() {
        // Pure red at L=0.5 drops to L=0.28.
        assert_eq!(darken(Rgb::new(255, 0, 0), 0.22), Rgb::new(143, 0, 0));
        // Grays stay gray.
        assert_eq!(darken(Rgb::WHITE, 0.22), Rgb::new(199, 199, 199));
    }

    #[test]
    fn darkening_floors_at_black() {
        assert_eq!(darken(Rgb::new(20, 20, 20), 0.22), Rgb::BLACK);
    }
}
