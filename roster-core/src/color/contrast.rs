use roster_model::Rgb;

use crate::constants::color::LUMINANCE_THRESHOLD;

/// WCAG relative luminance, `0.0` for black through `1.0` for white.
pub fn relative_luminance(color: Rgb) -> f64 {
    let [r, g, b] = color.to_unit().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Black text on light backgrounds, white text on dark ones.
pub fn contrast_text_color(background: Rgb) -> Rgb {
    if relative_luminance(background) > LUMINANCE_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
