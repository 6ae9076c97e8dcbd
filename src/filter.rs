//! Chroma-key background filter.
//!
//! Logo backgrounds and grey lettering are low-saturation, while the coloured
//! parts of the logo are not. Saturation is approximated by the spread between
//! the largest and smallest colour channel:
//! `diff = max(R, G, B) - min(R, G, B)`.

use image::{Rgba, RgbaImage};

/// Pixels with a channel spread at or below this value are cleared.
pub const COLORFULNESS_THRESHOLD: u8 = 15;

/// Replacement for cleared pixels: fully transparent white.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Spread between the largest and smallest colour channel of a pixel.
///
/// The alpha channel is ignored.
#[must_use]
pub fn color_difference(px: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = px.0;
    r.max(g).max(b) - r.min(g).min(b)
}

/// Whether a pixel is saturated enough to survive the filter.
#[must_use]
pub fn is_colorful(px: &Rgba<u8>) -> bool {
    color_difference(px) > COLORFULNESS_THRESHOLD
}

/// Clear every low-saturation pixel of `image` in place.
///
/// Colourful pixels are left exactly as they are (alpha included). All other
/// pixels become [`TRANSPARENT`]. Returns the number of cleared pixels.
pub fn filter_background(image: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for px in image.pixels_mut() {
        if !is_colorful(px) {
            *px = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}
