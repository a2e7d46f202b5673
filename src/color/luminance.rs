//! Reduction of an RGB triple to a single intensity byte
//!
//! Single-color loads (pin LEDs, scanned matrices, WS2811 3x1 modules)
//! cannot show hue, so every submitted color is collapsed to one byte.

use crate::color::Rgb;
use crate::math8::mean3;

/// Red weight of the fixed luminance formula (out of 256)
const LUMA_R: u16 = 77;
/// Green weight of the fixed luminance formula (out of 256)
const LUMA_G: u16 = 150;
/// Blue weight of the fixed luminance formula (out of 256)
const LUMA_B: u16 = 29;

/// Returns `true` if any channel is nonzero
#[inline]
pub const fn is_lit(color: Rgb) -> bool {
    color.r > 0 || color.g > 0 || color.b > 0
}

/// Unweighted mean of the three channels
#[inline]
pub const fn average_luminance(color: Rgb) -> u8 {
    mean3(color.r, color.g, color.b)
}

/// Perceptual luminance using fixed 77/150/29 weights
///
/// The weights sum to 256, so white maps to 255 and black to 0.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn weighted_luminance(color: Rgb) -> u8 {
    let sum = color.r as u16 * LUMA_R + color.g as u16 * LUMA_G + color.b as u16 * LUMA_B;
    (sum >> 8) as u8
}
